//! スタイル定義

pub mod theme;
