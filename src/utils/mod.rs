pub mod constants;
pub mod i18n;
pub mod storage;
