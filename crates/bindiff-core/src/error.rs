//! 差分計算のエラー型
//!
//! 行数上限の超過はエラーではない（`DiffResult::limit_exceeded` で通知する）。
//! ここに置くのは呼び出し側の設定ミスだけ。

use alloc::string::String;

/// 差分オプションのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// 1 行のバイト数が 0
    InvalidLineWidth,
    /// 先読みウィンドウが 0
    InvalidLookaheadWindow,
    /// オプション JSON の解析に失敗
    InvalidOptions(String),
}

impl core::fmt::Display for DiffError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DiffError::InvalidLineWidth => write!(f, "Invalid line width (must be at least 1)"),
            DiffError::InvalidLookaheadWindow => {
                write!(f, "Invalid lookahead window (must be at least 1)")
            }
            DiffError::InvalidOptions(msg) => write!(f, "Invalid diff options: {}", msg),
        }
    }
}
