mod codegen;
mod parser;

pub(crate) use codegen::expand;
