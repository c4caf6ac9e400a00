pub mod use_info;
