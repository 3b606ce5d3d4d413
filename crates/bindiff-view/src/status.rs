//! 差分結果の状態表示
//!
//! 行数上限の超過は読み込みエラーとは別の状態として扱う。
//! 表示文言のローカライズは呼び出し側の責任。

use bindiff_core::DiffResult;

/// 差分ビューの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    /// 左右どちらかが未読み込み
    MissingInput,
    /// 計算中（結果がまだ届いていない）
    Pending,
    /// 差分なし
    Identical,
    /// 差分行あり
    Differences { lines: usize },
    /// 差分行が上限を超えた
    TooManyDifferences { limit: usize },
}

impl DiffStatus {
    /// 差分結果から状態を決める
    ///
    /// `limit` は結果を計算したときの差分行数上限。
    pub fn from_result(result: &DiffResult, limit: Option<usize>) -> Self {
        if result.limit_exceeded {
            DiffStatus::TooManyDifferences {
                limit: limit.unwrap_or(0),
            }
        } else if result.lines.is_empty() {
            DiffStatus::Identical
        } else {
            DiffStatus::Differences {
                lines: result.lines.len(),
            }
        }
    }
}

impl core::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DiffStatus::MissingInput => write!(f, "Select two files to compare"),
            DiffStatus::Pending => write!(f, "Comparing files..."),
            DiffStatus::Identical => write!(f, "Files are identical"),
            DiffStatus::Differences { lines: 1 } => write!(f, "1 differing line"),
            DiffStatus::Differences { lines } => write!(f, "{} differing lines", lines),
            DiffStatus::TooManyDifferences { limit } => write!(
                f,
                "Too many differing lines (threshold is {}); raise the threshold or pick smaller files",
                limit
            ),
        }
    }
}
