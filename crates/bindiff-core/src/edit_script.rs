//! 最短編集スクリプトによるアラインメント
//!
//! Myers の O(ND) 貪欲アルゴリズムでバイト列間の最短編集スクリプトを求め、
//! 削除位置と挿入位置の集合に変換してから両側を並べて歩く。
//!
//! ```text
//! 削除位置 ∧ 挿入位置 → 置換ペア (ByteDiff::pair)
//! 削除位置のみ        → Removed
//! 挿入位置のみ        → Inserted
//! どちらでもない      → 位置で対応付け (Equal)
//! ```
//!
//! メモリは編集距離 D に対して O(D²)。D が `max_edit_distance` を超えた入力は
//! 先読み法にフォールバックする。

use alloc::vec;
use alloc::vec::Vec;

use crate::align::{Aligner, LookaheadAligner};
use crate::model::ByteDiff;
use crate::{DEFAULT_LOOKAHEAD_WINDOW, DEFAULT_MAX_EDIT_DISTANCE};

/// 最短編集スクリプトに基づく Aligner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditScriptAligner {
    max_edit_distance: usize,
    fallback: LookaheadAligner,
}

/// 編集スクリプトを位置集合で表したもの
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditScript {
    /// left[x] が削除されたか
    deleted: Vec<bool>,
    /// right[y] が挿入されたか
    inserted: Vec<bool>,
}

impl EditScriptAligner {
    pub fn new(max_edit_distance: usize) -> Self {
        EditScriptAligner {
            max_edit_distance,
            fallback: LookaheadAligner::new(DEFAULT_LOOKAHEAD_WINDOW),
        }
    }

    /// フォールバック時の先読み幅を設定する
    pub fn with_fallback_window(mut self, window: usize) -> Self {
        self.fallback = LookaheadAligner::new(window);
        self
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }
}

impl Default for EditScriptAligner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EDIT_DISTANCE)
    }
}

impl Aligner for EditScriptAligner {
    fn align(&self, left: &[u8], right: &[u8]) -> Vec<ByteDiff> {
        if left.is_empty() || right.is_empty() {
            return self.fallback.align(left, right);
        }

        let script = match shortest_edit_script(left, right, self.max_edit_distance) {
            Some(script) => script,
            None => {
                log::warn!(
                    "edit distance exceeds {}; falling back to lookahead alignment",
                    self.max_edit_distance
                );
                return self.fallback.align(left, right);
            }
        };

        let mut out = Vec::with_capacity(left.len().max(right.len()));
        let (mut i, mut j) = (0usize, 0usize);

        while i < left.len() || j < right.len() {
            let del = i < left.len() && script.deleted[i];
            let ins = j < right.len() && script.inserted[j];

            if i < left.len() && j < right.len() && del == ins {
                out.push(ByteDiff::pair(i, left[i], j, right[j]));
                i += 1;
                j += 1;
            } else if i < left.len() && (del || j >= right.len()) {
                out.push(ByteDiff::removed(i, left[i]));
                i += 1;
            } else {
                out.push(ByteDiff::inserted(j, right[j]));
                j += 1;
            }
        }

        out
    }
}

/// Myers の貪欲法で最短編集スクリプトを求める
///
/// 編集距離が `max_d` を超える場合は None。
fn shortest_edit_script(left: &[u8], right: &[u8], max_d: usize) -> Option<EditScript> {
    let n = left.len() as isize;
    let m = right.len() as isize;
    let bound = max_d.min(left.len() + right.len());
    let offset = bound as isize + 1;

    // v[k + offset] = 対角線 k 上で到達した最遠の x
    let mut v = vec![0isize; 2 * bound + 3];
    // trace[d] = ステップ d 終了時の v[-d..=d]
    let mut trace: Vec<Vec<isize>> = Vec::new();

    for d in 0..=bound as isize {
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && left[x as usize] == right[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;

            if x >= n && y >= m {
                trace.push(snapshot(&v, d, offset));
                return Some(backtrack(&trace, left.len(), right.len()));
            }
            k += 2;
        }
        trace.push(snapshot(&v, d, offset));
    }

    None
}

fn snapshot(v: &[isize], d: isize, offset: isize) -> Vec<isize> {
    v[(offset - d) as usize..=(offset + d) as usize].to_vec()
}

/// trace[d] から対角線 k の値を読む
fn at(trace: &[Vec<isize>], d: isize, k: isize) -> isize {
    trace[d as usize][(k + d) as usize]
}

fn backtrack(trace: &[Vec<isize>], n: usize, m: usize) -> EditScript {
    let mut script = EditScript {
        deleted: vec![false; n],
        inserted: vec![false; m],
    };

    let (mut x, mut y) = (n as isize, m as isize);
    for d in (1..trace.len() as isize).rev() {
        let k = x - y;
        let prev_k = if k == -d || (k != d && at(trace, d - 1, k - 1) < at(trace, d - 1, k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = at(trace, d - 1, prev_k);
        let prev_y = prev_x - prev_k;

        // スネーク（一致の連続）を遡る
        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
        }

        if prev_k == k + 1 {
            script.inserted[prev_y as usize] = true;
        } else {
            script.deleted[prev_x as usize] = true;
        }
        x = prev_x;
        y = prev_y;
    }

    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiffKind;

    fn kinds(diffs: &[ByteDiff]) -> Vec<DiffKind> {
        diffs.iter().map(|d| d.kind()).collect()
    }

    fn edit_count(script: &EditScript) -> usize {
        script.deleted.iter().filter(|d| **d).count()
            + script.inserted.iter().filter(|i| **i).count()
    }

    #[test]
    fn test_script_identical_is_empty() {
        let script = shortest_edit_script(b"ABCD", b"ABCD", 16).unwrap();
        assert_eq!(edit_count(&script), 0);
    }

    #[test]
    fn test_script_is_minimal() {
        // 古典的な例: ABCABBA → CBABAC は編集距離 5
        let script = shortest_edit_script(b"ABCABBA", b"CBABAC", 64).unwrap();
        assert_eq!(edit_count(&script), 5);
    }

    #[test]
    fn test_script_bound_exceeded() {
        assert!(shortest_edit_script(b"AAAA", b"BBBB", 3).is_none());
        assert!(shortest_edit_script(b"AAAA", b"BBBB", 8).is_some());
    }

    #[test]
    fn test_substitution_paired_as_changed() {
        let diffs = EditScriptAligner::default().align(b"ABC", b"AXC");
        assert_eq!(
            kinds(&diffs),
            alloc::vec![DiffKind::Equal, DiffKind::Changed, DiffKind::Equal]
        );
    }

    #[test]
    fn test_insertion_far_beyond_window() {
        // 先読み法では見つからない距離の挿入も正しく扱える
        let left: Vec<u8> = (0u8..50).collect();
        let mut right: Vec<u8> = alloc::vec![0xEE; 150];
        right.extend_from_slice(&left);

        let diffs = EditScriptAligner::default().align(&left, &right);
        let inserted = diffs.iter().filter(|d| d.kind() == DiffKind::Inserted).count();
        let equal = diffs.iter().filter(|d| d.kind() == DiffKind::Equal).count();
        assert_eq!(inserted, 150);
        assert_eq!(equal, 50);
    }

    #[test]
    fn test_fallback_when_bound_exceeded() {
        let aligner = EditScriptAligner::new(2);
        let diffs = aligner.align(b"AAAA", b"BBBB");
        assert_eq!(diffs, LookaheadAligner::default().align(b"AAAA", b"BBBB"));
    }

    #[test]
    fn test_one_sided() {
        let diffs = EditScriptAligner::default().align(b"", b"AB");
        assert_eq!(kinds(&diffs), alloc::vec![DiffKind::Inserted; 2]);
        assert!(EditScriptAligner::default().align(b"", b"").is_empty());
    }
}
