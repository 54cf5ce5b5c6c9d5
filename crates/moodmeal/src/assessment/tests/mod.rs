mod common;
mod scorer;
mod selector;
