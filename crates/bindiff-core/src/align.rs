//! バイト単位のアラインメント
//!
//! ## 先読み付き貪欲法
//!
//! ```text
//! left : A B C D E        i →
//! right: A X B C D E      j →
//!
//! i=1, j=1: B != X
//!   left[2..=1+W] に X があるか? → なし
//!   right[2..=1+W] に B があるか? → あり (j=2)
//!   → 右側だけ一致したので X は挿入 (Inserted)、j だけ進める
//! ```
//!
//! 両側とも一致、または両側とも不一致なら置換 (`Changed`) として両方進める。
//! 先読み幅を制限しているので 1 ステップのコストは O(W)。

use alloc::vec::Vec;

use crate::model::ByteDiff;
use crate::DEFAULT_LOOKAHEAD_WINDOW;

/// 2 つのバイト列を 1 バイト 1 レコードに対応付ける
///
/// 実装は以下を保証すること:
/// - 左側の全バイトがちょうど 1 回ずつ、インデックス昇順で現れる
/// - 右側の全バイトも同様
pub trait Aligner {
    fn align(&self, left: &[u8], right: &[u8]) -> Vec<ByteDiff>;
}

/// 先読みウィンドウ付き貪欲アラインメント
///
/// 入力を入れ替えると `Inserted` と `Removed` が入れ替わるだけの対称な結果になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadAligner {
    window: usize,
}

impl LookaheadAligner {
    /// `window` バイト先まで探索する Aligner を生成する（0 は 1 として扱う）
    pub fn new(window: usize) -> Self {
        LookaheadAligner {
            window: window.max(1),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for LookaheadAligner {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD_WINDOW)
    }
}

impl Aligner for LookaheadAligner {
    fn align(&self, left: &[u8], right: &[u8]) -> Vec<ByteDiff> {
        let mut out = Vec::with_capacity(left.len().max(right.len()));
        let (mut i, mut j) = (0usize, 0usize);

        while i < left.len() && j < right.len() {
            let (l, r) = (left[i], right[j]);
            if l == r {
                out.push(ByteDiff::pair(i, l, j, r));
                i += 1;
                j += 1;
                continue;
            }

            // right[j] が左側の少し先にあれば left[i] は削除された
            let removed = occurs_within(left, i + 1, self.window, r);
            // left[i] が右側の少し先にあれば right[j] は挿入された
            let inserted = occurs_within(right, j + 1, self.window, l);

            match (removed, inserted) {
                (true, false) => {
                    out.push(ByteDiff::removed(i, l));
                    i += 1;
                }
                (false, true) => {
                    out.push(ByteDiff::inserted(j, r));
                    j += 1;
                }
                _ => {
                    out.push(ByteDiff::pair(i, l, j, r));
                    i += 1;
                    j += 1;
                }
            }
        }

        out.extend(left[i..].iter().enumerate().map(|(k, &b)| ByteDiff::removed(i + k, b)));
        out.extend(right[j..].iter().enumerate().map(|(k, &b)| ByteDiff::inserted(j + k, b)));
        out
    }
}

/// `haystack[start..start + window]`（末尾で切り詰め）に `needle` が含まれるか
fn occurs_within(haystack: &[u8], start: usize, window: usize, needle: u8) -> bool {
    if start >= haystack.len() {
        return false;
    }
    let end = start.saturating_add(window).min(haystack.len());
    haystack[start..end].contains(&needle)
}
