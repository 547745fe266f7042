//! Chain stages that wrap exactly one parent enumerator and transform its output lazily.

mod drop;
mod select;
mod take;
mod until;
mod where_;

pub use self::drop::DropEnumerator;
pub use self::select::SelectEnumerator;
pub use self::take::TakeEnumerator;
pub use self::until::UntilEnumerator;
pub use self::where_::WhereEnumerator;
