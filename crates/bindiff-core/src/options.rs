//! 差分オプション
//!
//! JS 側からは JSON で渡される。省略したフィールドはデフォルト値になる。
//!
//! ```json
//! { "lineWidth": 16, "differenceLineLimit": 10000, "strategy": "lookahead" }
//! ```

use alloc::boxed::Box;
use core::num::NonZeroUsize;

use serde::Deserialize;

use crate::align::{Aligner, LookaheadAligner};
use crate::edit_script::EditScriptAligner;
use crate::error::DiffError;
use crate::{DEFAULT_LINE_WIDTH, DEFAULT_LOOKAHEAD_WINDOW, DEFAULT_MAX_EDIT_DISTANCE};

/// アラインメント戦略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignStrategy {
    /// 先読みウィンドウ付きの貪欲法（デフォルト）
    #[default]
    Lookahead,
    /// 最短編集スクリプト（O(ND)）
    EditScript,
}

/// 差分計算のオプション
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    /// 1 行のバイト数（1 以上）
    pub line_width: usize,
    /// 差分行数の上限。None なら無制限
    pub difference_line_limit: Option<usize>,
    /// アラインメント戦略
    pub strategy: AlignStrategy,
    /// Lookahead 戦略の先読みバイト数（1 以上）
    pub lookahead_window: usize,
    /// EditScript 戦略で探索する編集距離の上限
    pub max_edit_distance: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            line_width: DEFAULT_LINE_WIDTH,
            difference_line_limit: None,
            strategy: AlignStrategy::default(),
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

impl DiffOptions {
    /// 差分行数の上限を設定する
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.difference_line_limit = Some(limit);
        self
    }

    /// 1 行のバイト数を設定する
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// アラインメント戦略を設定する
    pub fn with_strategy(mut self, strategy: AlignStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 設定値を検証し、行幅を返す
    ///
    /// # エラー
    /// - `DiffError::InvalidLineWidth`: line_width が 0
    /// - `DiffError::InvalidLookaheadWindow`: lookahead_window が 0
    pub fn validate(&self) -> Result<NonZeroUsize, DiffError> {
        if self.lookahead_window == 0 {
            return Err(DiffError::InvalidLookaheadWindow);
        }
        NonZeroUsize::new(self.line_width).ok_or(DiffError::InvalidLineWidth)
    }

    /// 選択された戦略の Aligner を生成する
    pub fn aligner(&self) -> Box<dyn Aligner> {
        match self.strategy {
            AlignStrategy::Lookahead => Box::new(LookaheadAligner::new(self.lookahead_window)),
            AlignStrategy::EditScript => Box::new(
                EditScriptAligner::new(self.max_edit_distance)
                    .with_fallback_window(self.lookahead_window),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DiffOptions::default();
        assert_eq!(opts.line_width, 16);
        assert_eq!(opts.lookahead_window, 100);
        assert_eq!(opts.difference_line_limit, None);
        assert_eq!(opts.strategy, AlignStrategy::Lookahead);
        assert_eq!(opts.validate().map(|w| w.get()), Ok(16));
    }

    #[test]
    fn test_zero_line_width_rejected() {
        let opts = DiffOptions::default().with_line_width(0);
        assert_eq!(opts.validate(), Err(DiffError::InvalidLineWidth));
    }

    #[test]
    fn test_zero_window_rejected() {
        let opts = DiffOptions {
            lookahead_window: 0,
            ..DiffOptions::default()
        };
        assert_eq!(opts.validate(), Err(DiffError::InvalidLookaheadWindow));
    }
}
