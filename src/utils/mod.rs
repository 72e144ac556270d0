pub mod datas;
pub mod errors;
