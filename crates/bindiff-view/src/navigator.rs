//! 差分行のナビゲーション
//!
//! 「次の差分」「前の差分」を行数で循環させる。

/// 現在選択中の差分行を管理する
///
/// ```text
/// count = 3
/// None ─advance→ 0 → 1 → 2 → 0 ...
/// None ─retreat→ 2 → 1 → 0 → 2 ...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffNavigator {
    count: usize,
    current: Option<usize>,
}

impl DiffNavigator {
    /// `count` 行を対象に、未選択状態で生成する
    pub fn new(count: usize) -> Self {
        DiffNavigator {
            count,
            current: None,
        }
    }

    /// 対象行数を変えて選択を解除する
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.current = None;
    }

    /// 次の行へ進む（末尾の次は先頭）
    ///
    /// 行がなければ None。
    pub fn advance(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let next = match self.current {
            Some(i) => (i + 1) % self.count,
            None => 0,
        };
        self.current = Some(next);
        self.current
    }

    /// 前の行へ戻る（先頭の前は末尾）
    ///
    /// 行がなければ None。
    pub fn retreat(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let prev = match self.current {
            Some(i) => (i + self.count - 1) % self.count,
            None => self.count - 1,
        };
        self.current = Some(prev);
        self.current
    }

    /// 指定した行を選択する（範囲外なら何もしない）
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.count {
            self.current = Some(index);
        }
        self.current
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
