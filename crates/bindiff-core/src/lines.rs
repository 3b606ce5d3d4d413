//! 行グルーピング
//!
//! アラインメント結果を `line_width` レコードごとのチャンクに区切り、
//! 差分を含むチャンクだけを `DiffLine` にする。
//!
//! ```text
//! chunk id:  0        1        2        3
//!           [====]   [==x=]   [====]   [x===]
//!                      ↓                 ↓
//! lines:            id=1              id=3
//! ```
//!
//! id は捨てたチャンクも含めた通し番号なので、ファイル内の位置を表す。

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::model::{ByteDiff, DiffLine, DiffResult};

/// アラインメント結果を行にまとめる
///
/// # 引数
/// - `diffs`: Aligner の出力
/// - `line_width`: 1 行のレコード数
/// - `limit`: 差分行数の上限。None なら無制限
///
/// # 戻り値
/// 差分行が `limit` を超えた時点で処理を打ち切り、空の行リストと
/// `limit_exceeded = true` を返す。ちょうど `limit` 行なら超過ではない。
pub fn group_lines(
    diffs: &[ByteDiff],
    line_width: NonZeroUsize,
    limit: Option<usize>,
) -> DiffResult {
    let mut lines: Vec<DiffLine> = Vec::new();

    for (id, chunk) in diffs.chunks(line_width.get()).enumerate() {
        if !chunk.iter().any(|c| c.kind().is_difference()) {
            continue;
        }

        if limit.is_some_and(|max| lines.len() >= max) {
            log::debug!("difference line limit {:?} exceeded at chunk {}", limit, id);
            return DiffResult::exceeded();
        }

        lines.push(DiffLine {
            id,
            offset_left: chunk.iter().filter_map(|c| c.left_index()).min(),
            offset_right: chunk.iter().filter_map(|c| c.right_index()).min(),
            cells: chunk.to_vec(),
        });
    }

    DiffResult {
        lines,
        limit_exceeded: false,
    }
}

/// 全チャンク数（捨てたものを含む）
pub fn chunk_count(diff_len: usize, line_width: NonZeroUsize) -> usize {
    diff_len.div_ceil(line_width.get())
}
