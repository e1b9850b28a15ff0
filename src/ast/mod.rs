mod ast;
mod file;
mod infix;
mod outline;
mod print;
mod validate;
mod visitor;

pub use ast::*;
pub use file::TreeFile;
pub use infix::Infix;
pub use outline::Outline;
pub use print::Printer;
pub use validate::Validator;
pub use visitor::*;



#[cfg(test)]
mod file_test;
