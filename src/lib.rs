//! Lazy, composable enumerators.
//!
//! An [`Enumerator`] is a single-pass, pull-based position in a sequence. Chain builders
//! (`drop`, `take`, `select`, `until`, `where_`) wrap an enumerator in a new one that borrows
//! it, so nothing is evaluated until a terminal consumer (`to_vec`, `copy_to`) pulls elements
//! through the whole chain.
//!
//! ```
//! use linq::Enumerator;
//!
//! let seq = vec![1, 2, 3, 4, 5, 6, 7, 8];
//!
//! let evens = linq::from_slice(&seq)
//!     .where_(|x: &i32| x % 2 == 0)
//!     .drop(1)
//!     .select(|x| x * 10)
//!     .to_vec();
//!
//! assert_eq!(vec![40, 60, 80], evens);
//! ```

pub mod combinators;
pub mod destination;
pub mod enumerator;
pub mod error;
pub mod plan;
pub mod predicate;
pub mod source;

mod test_util;

pub use crate::destination::Destination;
pub use crate::enumerator::Enumerator;
pub use crate::enumerator::Iter;
pub use crate::error::Error;
pub use crate::plan::Plan;
pub use crate::plan::PlanFormat;
pub use crate::plan::Stage;
pub use crate::predicate::Predicate;
pub use crate::source::Cursor;
pub use crate::source::from;
pub use crate::source::from_iter;
pub use crate::source::from_slice;
