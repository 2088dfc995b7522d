pub mod create_block;
