//! Change-set normalization — extracted actions become one canonical
//! `ChangeRecord` per (file, approach).

pub mod change_record;

pub use change_record::ChangeRecord;
