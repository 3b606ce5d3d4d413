//! BinDiffViewer wasm-bindgen エクスポート
//!
//! JS の表示レイヤーから呼び出すビューア状態の主エントリポイント。
//! ファイル読み込み・ドラッグ&ドロップ・ローカライズは JS 側の責任。

use wasm_bindgen::prelude::*;

use bindiff_view::DiffSession;

use crate::json::{parse_options, parse_side, rendered_side_to_json, result_to_json};

/// 差分ビューア
///
/// ## 内部アーキテクチャ
///
/// ```text
/// BinDiffViewer
///   └── DiffSession   (bindiff-view) - 入力・世代番号・結果・選択
///         ├── diff()  (bindiff-core) - Aligner + group_lines
///         └── DiffNavigator          - 次へ/前へ
/// ```
///
/// WASM はシングルスレッドなので `recompute` は同期的に計算する。
/// Web Worker で計算する場合も、JS から見た API は同じ。
#[wasm_bindgen]
pub struct BinDiffViewer {
    session: DiffSession,
}

#[wasm_bindgen]
impl BinDiffViewer {
    /// ビューアを初期化する
    ///
    /// # 引数
    /// - `options_json`: 差分オプション（省略時はデフォルト）
    ///
    /// # 例（TypeScript）
    /// ```typescript
    /// const viewer = new BinDiffViewer('{"differenceLineLimit": 10000}');
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: Option<String>) -> Result<BinDiffViewer, JsError> {
        let options = parse_options(options_json.as_deref())
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
        let session =
            DiffSession::new(options).map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
        Ok(BinDiffViewer { session })
    }

    /// 左側のファイル内容を設定する（前回の結果は破棄される）
    #[wasm_bindgen(js_name = "setLeft")]
    pub fn set_left(&mut self, bytes: &[u8]) {
        self.session.set_left(bytes.to_vec());
    }

    /// 右側のファイル内容を設定する（前回の結果は破棄される）
    #[wasm_bindgen(js_name = "setRight")]
    pub fn set_right(&mut self, bytes: &[u8]) {
        self.session.set_right(bytes.to_vec());
    }

    #[wasm_bindgen(js_name = "clearLeft")]
    pub fn clear_left(&mut self) {
        self.session.clear_left();
    }

    #[wasm_bindgen(js_name = "clearRight")]
    pub fn clear_right(&mut self) {
        self.session.clear_right();
    }

    /// オプションを差し替える（前回の結果は破棄される）
    #[wasm_bindgen(js_name = "setOptions")]
    pub fn set_options(&mut self, options_json: &str) -> Result<(), JsError> {
        let options = parse_options(Some(options_json))
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
        self.session
            .set_options(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }

    /// 差分を計算する
    ///
    /// # 戻り値
    /// `DiffResult` の JS オブジェクト。左右どちらかが未設定なら `undefined`。
    /// `limitExceeded` が true のとき `lines` は空なので、
    /// 差分表示の代わりに `statusText()` を表示すること。
    pub fn recompute(&mut self) -> Result<JsValue, JsError> {
        let result = self
            .session
            .recompute()
            .map_err(|e| JsError::new(&format!("Diff failed: {}", e)))?;
        match result {
            Some(result) => {
                let json = result_to_json(result)
                    .map_err(|e| JsError::new(&format!("Result encode failed: {}", e)))?;
                js_sys::JSON::parse(&json)
                    .map_err(|_| JsError::new("Result encode failed: invalid JSON"))
            }
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// 次の差分行へ移動し、その行の id を返す（末尾の次は先頭）
    pub fn next(&mut self) -> Option<u32> {
        self.session.advance().and_then(|line| u32::try_from(line.id).ok())
    }

    /// 前の差分行へ移動し、その行の id を返す（先頭の前は末尾）
    pub fn previous(&mut self) -> Option<u32> {
        self.session.retreat().and_then(|line| u32::try_from(line.id).ok())
    }

    /// 現在選択中の差分行のインデックス（`lines` 内の位置）
    #[wasm_bindgen(getter, js_name = "currentIndex")]
    pub fn current_index(&self) -> Option<u32> {
        self.session
            .navigator()
            .current()
            .and_then(|i| u32::try_from(i).ok())
    }

    /// 差分行の数
    #[wasm_bindgen(getter, js_name = "lineCount")]
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.session.navigator().count()).unwrap_or(u32::MAX)
    }

    /// 状態表示用の文言（英語。ローカライズは JS 側）
    #[wasm_bindgen(js_name = "statusText")]
    pub fn status_text(&self) -> String {
        self.session.status().to_string()
    }

    /// 差分行の片側を表示用に整形する
    ///
    /// # 引数
    /// - `index`: `lines` 内の位置
    /// - `side`: `"left"` または `"right"`
    ///
    /// # 戻り値
    /// `{ address, hex, text, kinds }` の JS オブジェクト。範囲外なら `undefined`。
    #[wasm_bindgen(js_name = "renderLine")]
    pub fn render_line(&self, index: u32, side: &str) -> Result<JsValue, JsError> {
        let side =
            parse_side(side).ok_or_else(|| JsError::new(&format!("Invalid side: {}", side)))?;
        let line = match self.session.line(index as usize) {
            Some(line) => line,
            None => return Ok(JsValue::UNDEFINED),
        };
        let json = rendered_side_to_json(line, side, self.session.options().line_width)
            .map_err(|e| JsError::new(&format!("Row encode failed: {}", e)))?;
        js_sys::JSON::parse(&json).map_err(|_| JsError::new("Row encode failed: invalid JSON"))
    }
}
