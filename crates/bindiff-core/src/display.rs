//! 表示用フォーマット
//!
//! ```text
//! address  hex                                               text
//! 00000010 41 42 43 44 45 46 47 48 49 4A 4B 4C 4D 4E 4F 50  ABCDEFGHIJKLMNOP
//! ```
//!
//! 片側に存在しないバイトは空白で埋め、列がずれないようにする。

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::model::{DiffKind, DiffLine};

/// 左右どちらの列か
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// アドレスを 8 桁の大文字 16 進数にする（なければ空白 8 文字）
pub fn format_address(address: Option<usize>) -> String {
    match address {
        Some(addr) => format!("{:08X}", addr),
        None => String::from("        "),
    }
}

/// バイトを 2 桁の大文字 16 進数にする（なければ空白 2 文字）
pub fn format_byte(byte: Option<u8>) -> String {
    match byte {
        Some(b) => format!("{:02X}", b),
        None => String::from("  "),
    }
}

/// バイトの表示文字（印字可能 ASCII 以外は '.'、なければ空白）
pub fn byte_glyph(byte: Option<u8>) -> char {
    match byte {
        Some(b @ 0x20..=0x7E) => b as char,
        Some(_) => '.',
        None => ' ',
    }
}

/// 片側 1 行分の表示データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedRow {
    /// 行頭アドレス
    pub address: String,
    /// 各セルの 16 進表記（line_width 個）
    pub hex: Vec<String>,
    /// 各セルの表示文字を連結したもの（line_width 文字）
    pub text: String,
    /// 各セルの差分種別（パディングセルは None）
    pub kinds: Vec<Option<DiffKind>>,
}

/// `DiffLine` の片側を表示用に整形する
///
/// セル数が `line_width` に満たない行は空白セルで埋める。
pub fn render_side(line: &DiffLine, side: Side, line_width: usize) -> RenderedRow {
    let width = line_width.max(line.cells.len());
    let mut hex = Vec::with_capacity(width);
    let mut text = String::with_capacity(width);
    let mut kinds = Vec::with_capacity(width);

    for cell in &line.cells {
        let byte = match side {
            Side::Left => cell.left_byte(),
            Side::Right => cell.right_byte(),
        };
        hex.push(format_byte(byte));
        text.push(byte_glyph(byte));
        kinds.push(Some(cell.kind()));
    }
    for _ in line.cells.len()..width {
        hex.push(format_byte(None));
        text.push(byte_glyph(None));
        kinds.push(None);
    }

    let offset = match side {
        Side::Left => line.offset_left,
        Side::Right => line.offset_right,
    };

    RenderedRow {
        address: format_address(offset),
        hex,
        text,
        kinds,
    }
}
