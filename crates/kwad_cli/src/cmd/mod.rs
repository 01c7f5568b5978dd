/// Asset extraction command.
pub mod extract;
/// Package table inspection command.
pub mod info;

pub(crate) mod util;
