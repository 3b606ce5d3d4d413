//! 差分結果のデータモデル
//!
//! ## 構造
//! ```text
//! DiffResult
//!   ├── lines: Vec<DiffLine>     差分を含む行だけ（line_width バイトごと）
//!   │     └── cells: Vec<ByteDiff>  1 バイト = 1 レコード
//!   └── limit_exceeded: bool     行数上限を超えたか
//! ```
//!
//! どの型も差分計算ごとに新しく作られ、作成後に変更されない。

use alloc::vec::Vec;

use serde::Serialize;

/// 1 バイト分のアラインメント種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffKind {
    /// 両側に存在し、値が同じ
    Equal,
    /// 両側に存在し、値が異なる（置換）
    Changed,
    /// 右側にだけ存在する（挿入）
    Inserted,
    /// 左側にだけ存在する（削除）
    Removed,
}

impl DiffKind {
    /// 差分として表示すべき種別か（`Equal` 以外）
    pub fn is_difference(&self) -> bool {
        !matches!(self, DiffKind::Equal)
    }

    /// 左右を入れ替えたときの種別
    pub fn swapped(&self) -> Self {
        match self {
            DiffKind::Inserted => DiffKind::Removed,
            DiffKind::Removed => DiffKind::Inserted,
            other => *other,
        }
    }
}

/// 1 バイト分のアラインメントレコード
///
/// フィールドは非公開で、コンストラクタ経由でのみ作れる。
/// そのため以下が常に成り立つ:
/// - `Equal`    ⇒ 両側のインデックスがあり、バイト値が等しい
/// - `Changed`  ⇒ 両側のインデックスがあり、バイト値が異なる
/// - `Removed`  ⇒ 左側のみ
/// - `Inserted` ⇒ 右側のみ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteDiff {
    left_index: Option<usize>,
    right_index: Option<usize>,
    left_byte: Option<u8>,
    right_byte: Option<u8>,
    kind: DiffKind,
}

impl ByteDiff {
    /// 両側のバイトを対応付ける。値が等しければ `Equal`、異なれば `Changed`
    pub fn pair(left_index: usize, left_byte: u8, right_index: usize, right_byte: u8) -> Self {
        let kind = if left_byte == right_byte {
            DiffKind::Equal
        } else {
            DiffKind::Changed
        };
        ByteDiff {
            left_index: Some(left_index),
            right_index: Some(right_index),
            left_byte: Some(left_byte),
            right_byte: Some(right_byte),
            kind,
        }
    }

    /// 左側にだけ存在するバイト
    pub fn removed(left_index: usize, left_byte: u8) -> Self {
        ByteDiff {
            left_index: Some(left_index),
            right_index: None,
            left_byte: Some(left_byte),
            right_byte: None,
            kind: DiffKind::Removed,
        }
    }

    /// 右側にだけ存在するバイト
    pub fn inserted(right_index: usize, right_byte: u8) -> Self {
        ByteDiff {
            left_index: None,
            right_index: Some(right_index),
            left_byte: None,
            right_byte: Some(right_byte),
            kind: DiffKind::Inserted,
        }
    }

    pub fn left_index(&self) -> Option<usize> {
        self.left_index
    }

    pub fn right_index(&self) -> Option<usize> {
        self.right_index
    }

    pub fn left_byte(&self) -> Option<u8> {
        self.left_byte
    }

    pub fn right_byte(&self) -> Option<u8> {
        self.right_byte
    }

    pub fn kind(&self) -> DiffKind {
        self.kind
    }

    /// 左右を入れ替えたレコード（`Inserted` ⇔ `Removed`）
    pub fn swapped(&self) -> Self {
        ByteDiff {
            left_index: self.right_index,
            right_index: self.left_index,
            left_byte: self.right_byte,
            right_byte: self.left_byte,
            kind: self.kind.swapped(),
        }
    }
}

/// 表示用の 1 行
///
/// 差分を 1 つ以上含むチャンクに対してだけ作られる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    /// 全チャンク中の位置（捨てられたチャンクも数える）
    pub id: usize,
    /// 左側インデックスの最小値（左側のバイトがなければ None）
    pub offset_left: Option<usize>,
    /// 右側インデックスの最小値（右側のバイトがなければ None）
    pub offset_right: Option<usize>,
    /// アラインメント順のセル（最大 line_width 個）
    pub cells: Vec<ByteDiff>,
}

impl DiffLine {
    /// 行内の差分セル数
    pub fn difference_count(&self) -> usize {
        self.cells.iter().filter(|c| c.kind().is_difference()).count()
    }
}

/// 差分計算の結果
///
/// `limit_exceeded == true` のとき `lines` は常に空。
/// 部分的な結果は返さない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
    pub limit_exceeded: bool,
}

impl DiffResult {
    /// 行数上限超過を表す結果
    pub fn exceeded() -> Self {
        DiffResult {
            lines: Vec::new(),
            limit_exceeded: true,
        }
    }

    /// 差分が一つもないか（上限超過は差分ありとみなす）
    pub fn is_identical(&self) -> bool {
        !self.limit_exceeded && self.lines.is_empty()
    }
}
