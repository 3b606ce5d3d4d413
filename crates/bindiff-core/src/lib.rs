//! # bindiff-core
//!
//! バイナリ差分のコア。
//!
//! 2 つのバイト列を 1 バイトずつ対応付け（Aligner）、固定幅の行に区切って
//! 差分を含む行だけを残す（Line Grouper）。
//! `no_std` + `alloc` 環境（WASM を含む）で動作する。
//!
//! ## パイプライン
//!
//! ```text
//! left, right ─→ Aligner ─→ Vec<ByteDiff> ─→ group_lines ─→ DiffResult
//!                  │                                          ├── lines
//!                  ├── LookaheadAligner (デフォルト)           └── limit_exceeded
//!                  └── EditScriptAligner
//! ```
//!
//! ## 戦略の違い
//!
//! 2 つの戦略は曖昧な置換で異なる結果を返す。
//! - `LookaheadAligner`: 100 バイト先までの先読みで挿入/削除/置換を判定する。
//!   1 ステップ O(W)。入力の入れ替えに対して対称。
//! - `EditScriptAligner`: 最短編集スクリプト。編集距離に上限があり、
//!   超えた場合は先読み法にフォールバックする。

#![no_std]
extern crate alloc;

use core::num::NonZeroUsize;

pub mod align;
pub mod display;
pub mod edit_script;
mod error;
pub mod lines;
pub mod model;
mod options;

pub use align::{Aligner, LookaheadAligner};
pub use display::{byte_glyph, format_address, format_byte, render_side, RenderedRow, Side};
pub use edit_script::EditScriptAligner;
pub use error::DiffError;
pub use lines::group_lines;
pub use model::{ByteDiff, DiffKind, DiffLine, DiffResult};
pub use options::{AlignStrategy, DiffOptions};

/// 1 行のデフォルトバイト数
pub const DEFAULT_LINE_WIDTH: usize = 16;

const DEFAULT_LINE_WIDTH_NONZERO: NonZeroUsize = match NonZeroUsize::new(DEFAULT_LINE_WIDTH) {
    Some(w) => w,
    None => panic!("DEFAULT_LINE_WIDTH must be non-zero"),
};

/// 先読みウィンドウのデフォルト幅（バイト）
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 100;

/// EditScript 戦略が探索する編集距離のデフォルト上限
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 1024;

/// 2 つのバイト列の差分を計算する
///
/// # エラー
/// - `DiffError::InvalidLineWidth`: line_width が 0
/// - `DiffError::InvalidLookaheadWindow`: lookahead_window が 0
///
/// 差分行数の上限超過はエラーではなく `DiffResult::limit_exceeded` で返す。
pub fn diff(left: &[u8], right: &[u8], options: &DiffOptions) -> Result<DiffResult, DiffError> {
    let line_width = options.validate()?;
    let aligned = options.aligner().align(left, right);
    let result = group_lines(&aligned, line_width, options.difference_line_limit);

    log::debug!(
        "diff: left={} right={} records={} lines={} limit_exceeded={}",
        left.len(),
        right.len(),
        aligned.len(),
        result.lines.len(),
        result.limit_exceeded
    );

    Ok(result)
}

/// デフォルトオプション（16 バイト幅、上限なし、先読み法）で差分を計算する
pub fn diff_bytes(left: &[u8], right: &[u8]) -> DiffResult {
    let aligned = LookaheadAligner::default().align(left, right);
    group_lines(&aligned, DEFAULT_LINE_WIDTH_NONZERO, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_abc() {
        let result = diff(b"ABC", b"ABC", &DiffOptions::default()).unwrap();
        assert!(result.lines.is_empty());
        assert!(!result.limit_exceeded);
    }

    #[test]
    fn test_single_substitution() {
        let result = diff(b"ABC", b"AXC", &DiffOptions::default()).unwrap();
        assert_eq!(result.lines.len(), 1);
        let cell = result.lines[0].cells[1];
        assert_eq!(cell.kind(), DiffKind::Changed);
        assert_eq!(cell.left_byte(), Some(0x42));
        assert_eq!(cell.right_byte(), Some(0x58));
    }

    #[test]
    fn test_empty_left() {
        let result = diff(b"", b"A", &DiffOptions::default()).unwrap();
        assert_eq!(result.lines.len(), 1);
        let cells = &result.lines[0].cells;
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].kind(), DiffKind::Inserted);
        assert_eq!(cells[0].right_index(), Some(0));
        assert_eq!(cells[0].left_index(), None);
    }

    #[test]
    fn test_difference_in_second_chunk() {
        let left = [0x33u8; 17];
        let mut right = [0x33u8; 17];
        right[16] = 0x34;

        let result = diff(&left, &right, &DiffOptions::default()).unwrap();
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].id, 1);
        assert_eq!(result.lines[0].offset_left, Some(16));
        assert_eq!(result.lines[0].offset_right, Some(16));
    }

    #[test]
    fn test_both_empty() {
        let result = diff(b"", b"", &DiffOptions::default().with_limit(0)).unwrap();
        assert_eq!(result, DiffResult::default());
    }

    #[test]
    fn test_invalid_line_width() {
        let err = diff(b"A", b"B", &DiffOptions::default().with_line_width(0));
        assert_eq!(err, Err(DiffError::InvalidLineWidth));
    }

    #[test]
    fn test_edit_script_strategy_selected() {
        let opts = DiffOptions::default().with_strategy(AlignStrategy::EditScript);
        let result = diff(b"ABC", b"AXC", &opts).unwrap();
        assert_eq!(result.lines[0].cells[1].kind(), DiffKind::Changed);
    }

    #[test]
    fn test_diff_bytes_matches_default_options() {
        let left = b"The quick brown fox";
        let right = b"The quack brown fax!";
        assert_eq!(
            diff_bytes(left, right),
            diff(left, right, &DiffOptions::default()).unwrap()
        );
    }
}
