mod common;

mod engine;
mod generator;
mod stratifier;
