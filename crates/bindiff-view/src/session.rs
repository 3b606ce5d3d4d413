//! 差分セッション
//!
//! 左右の入力が変わるたびに差分を計算し直す状態機械。
//!
//! ## 世代番号
//!
//! ```text
//! set_left ──→ generation = 1 ─→ prepare() ─→ DiffJob{gen=1} ─→ (別スレッド/Worker) run()
//! set_right ─→ generation = 2 ─→ prepare() ─→ DiffJob{gen=2} ─→ run()
//!                                     complete(outcome gen=1) → Stale（破棄）
//!                                     complete(outcome gen=2) → Current（採用）
//! ```
//!
//! 入力が変わった後に届いた古い結果は捨てる（後勝ち）。
//! 計算の途中キャンセルはしない。

use alloc::sync::Arc;

use bindiff_core::{diff, DiffError, DiffLine, DiffOptions, DiffResult};

use crate::navigator::DiffNavigator;
use crate::status::DiffStatus;

/// 1 回分の差分計算に必要な入力のスナップショット
///
/// `Send` なので計算スレッドに渡せる。
#[derive(Debug, Clone)]
pub struct DiffJob {
    generation: u64,
    left: Arc<[u8]>,
    right: Arc<[u8]>,
    options: DiffOptions,
}

impl DiffJob {
    /// 差分を計算する
    pub fn run(self) -> DiffOutcome {
        let result = diff(&self.left, &self.right, &self.options);
        DiffOutcome {
            generation: self.generation,
            result,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// 計算結果（どの世代の入力から計算したかを持つ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    generation: u64,
    result: Result<DiffResult, DiffError>,
}

impl DiffOutcome {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// `complete` に渡した結果が採用されたか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// 現在の入力に対する結果として採用した
    Current,
    /// 入力が変わった後に届いたので破棄した
    Stale,
}

/// 差分ビューのセッション
pub struct DiffSession {
    left: Option<Arc<[u8]>>,
    right: Option<Arc<[u8]>>,
    options: DiffOptions,
    /// 入力が変わるたびに増える
    generation: u64,
    /// 現在の世代に対する結果
    result: Option<DiffResult>,
    navigator: DiffNavigator,
}

impl DiffSession {
    /// 新しいセッションを生成する
    ///
    /// # エラー
    /// - オプションが不正（`DiffOptions::validate` 参照）
    pub fn new(options: DiffOptions) -> Result<Self, DiffError> {
        options.validate()?;
        Ok(DiffSession {
            left: None,
            right: None,
            options,
            generation: 0,
            result: None,
            navigator: DiffNavigator::default(),
        })
    }

    /// 左側のバッファを差し替える
    pub fn set_left(&mut self, bytes: impl Into<Arc<[u8]>>) {
        self.left = Some(bytes.into());
        self.invalidate();
    }

    /// 右側のバッファを差し替える
    pub fn set_right(&mut self, bytes: impl Into<Arc<[u8]>>) {
        self.right = Some(bytes.into());
        self.invalidate();
    }

    pub fn clear_left(&mut self) {
        self.left = None;
        self.invalidate();
    }

    pub fn clear_right(&mut self) {
        self.right = None;
        self.invalidate();
    }

    /// オプションを差し替える
    ///
    /// # エラー
    /// - オプションが不正。この場合セッションは変更されない
    pub fn set_options(&mut self, options: DiffOptions) -> Result<(), DiffError> {
        options.validate()?;
        self.options = options;
        self.invalidate();
        Ok(())
    }

    /// 現在の入力で計算ジョブを作る
    ///
    /// 左右どちらかが未設定なら None。
    pub fn prepare(&self) -> Option<DiffJob> {
        let left = self.left.clone()?;
        let right = self.right.clone()?;
        Some(DiffJob {
            generation: self.generation,
            left,
            right,
            options: self.options.clone(),
        })
    }

    /// 計算結果を受け取る
    ///
    /// 現在の世代と一致しない結果は破棄して `Accepted::Stale` を返す。
    ///
    /// # エラー
    /// - 現在の世代の計算がオプションエラーで失敗した
    pub fn complete(&mut self, outcome: DiffOutcome) -> Result<Accepted, DiffError> {
        if outcome.generation != self.generation {
            log::debug!(
                "discarding stale diff result (generation {} != {})",
                outcome.generation,
                self.generation
            );
            return Ok(Accepted::Stale);
        }

        let result = outcome.result?;
        log::info!(
            "diff ready: {} lines, limit_exceeded={}",
            result.lines.len(),
            result.limit_exceeded
        );
        self.navigator.reset(result.lines.len());
        self.result = Some(result);
        Ok(Accepted::Current)
    }

    /// その場で計算して結果を反映する
    ///
    /// 左右どちらかが未設定なら Ok(None)。
    pub fn recompute(&mut self) -> Result<Option<&DiffResult>, DiffError> {
        let job = match self.prepare() {
            Some(job) => job,
            None => return Ok(None),
        };
        self.complete(job.run())?;
        Ok(self.result.as_ref())
    }

    /// 次の差分行を選択する
    pub fn advance(&mut self) -> Option<&DiffLine> {
        let index = self.navigator.advance()?;
        self.line(index)
    }

    /// 前の差分行を選択する
    pub fn retreat(&mut self) -> Option<&DiffLine> {
        let index = self.navigator.retreat()?;
        self.line(index)
    }

    /// 現在選択中の差分行
    pub fn current_line(&self) -> Option<&DiffLine> {
        self.line(self.navigator.current()?)
    }

    pub fn line(&self, index: usize) -> Option<&DiffLine> {
        self.result.as_ref()?.lines.get(index)
    }

    pub fn result(&self) -> Option<&DiffResult> {
        self.result.as_ref()
    }

    pub fn navigator(&self) -> &DiffNavigator {
        &self.navigator
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 現在の状態
    pub fn status(&self) -> DiffStatus {
        if self.left.is_none() || self.right.is_none() {
            return DiffStatus::MissingInput;
        }
        match &self.result {
            Some(result) => DiffStatus::from_result(result, self.options.difference_line_limit),
            None => DiffStatus::Pending,
        }
    }

    /// 入力が変わったので結果と選択を捨てる
    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.result = None;
        self.navigator.reset(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn session() -> DiffSession {
        DiffSession::new(DiffOptions::default()).unwrap()
    }

    #[test]
    fn test_missing_input() {
        let mut s = session();
        assert_eq!(s.status(), DiffStatus::MissingInput);
        s.set_left(vec![1u8, 2, 3]);
        assert!(s.prepare().is_none());
        assert_eq!(s.recompute().unwrap(), None);
    }

    #[test]
    fn test_recompute_and_navigate() {
        let mut s = session();
        let left: alloc::vec::Vec<u8> = (0u8..64).collect();
        let mut right = left.clone();
        right[3] = 0xFF;
        right[40] = 0xFE;
        s.set_left(left);
        s.set_right(right);
        assert_eq!(s.status(), DiffStatus::Pending);

        let result = s.recompute().unwrap().unwrap();
        assert_eq!(result.lines.len(), 2);
        assert_eq!(s.status(), DiffStatus::Differences { lines: 2 });

        assert_eq!(s.advance().map(|l| l.id), Some(0));
        assert_eq!(s.advance().map(|l| l.id), Some(2));
        assert_eq!(s.advance().map(|l| l.id), Some(0));
        assert_eq!(s.retreat().map(|l| l.id), Some(2));
        assert_eq!(s.current_line().map(|l| l.id), Some(2));
    }

    #[test]
    fn test_stale_outcome_discarded() {
        let mut s = session();
        s.set_left(vec![1u8, 2, 3]);
        s.set_right(vec![1u8, 2, 3]);
        let old_job = s.prepare().unwrap();

        // 計算中に右側が変わった
        s.set_right(vec![1u8, 9, 3]);
        let new_job = s.prepare().unwrap();
        assert!(new_job.generation() > old_job.generation());

        assert_eq!(s.complete(old_job.run()), Ok(Accepted::Stale));
        assert!(s.result().is_none());

        assert_eq!(s.complete(new_job.run()), Ok(Accepted::Current));
        assert_eq!(s.result().map(|r| r.lines.len()), Some(1));
    }

    #[test]
    fn test_outcome_after_clear_is_stale() {
        let mut s = session();
        s.set_left(vec![1u8]);
        s.set_right(vec![2u8]);
        let job = s.prepare().unwrap();
        s.clear_left();
        assert_eq!(s.complete(job.run()), Ok(Accepted::Stale));
        assert_eq!(s.status(), DiffStatus::MissingInput);
    }

    #[test]
    fn test_new_input_clears_selection() {
        let mut s = session();
        s.set_left(vec![1u8]);
        s.set_right(vec![2u8]);
        s.recompute().unwrap();
        assert!(s.advance().is_some());

        s.set_right(vec![3u8]);
        assert!(s.current_line().is_none());
        assert!(s.advance().is_none());
    }

    #[test]
    fn test_limit_exceeded_status() {
        let mut s = DiffSession::new(DiffOptions::default().with_limit(1)).unwrap();
        s.set_left(vec![0u8; 48]);
        s.set_right(vec![1u8; 48]);
        let result = s.recompute().unwrap().unwrap();
        assert!(result.limit_exceeded);
        assert_eq!(s.status(), DiffStatus::TooManyDifferences { limit: 1 });
        assert!(s.advance().is_none());
    }

    #[test]
    fn test_invalid_options_rejected() {
        let mut s = session();
        let before = s.generation();
        let err = s.set_options(DiffOptions::default().with_line_width(0));
        assert_eq!(err, Err(DiffError::InvalidLineWidth));
        assert_eq!(s.generation(), before);
        assert!(DiffSession::new(DiffOptions::default().with_line_width(0)).is_err());
    }
}
