//! # bindiff-wasm
//!
//! wasm-bindgen エクスポート：16 進差分ビューア（JS）から呼び出す公開 API。
//!
//! ## 使用方法（TypeScript）
//!
//! ```typescript
//! import { BinDiffViewer, init_panic_hook, init_logging } from '../bindiff-wasm-pkg/bindiff_wasm';
//!
//! // パニック時のスタックトレースを有効化（開発時）
//! init_panic_hook();
//! init_logging("debug");
//!
//! const viewer = new BinDiffViewer('{"differenceLineLimit": 10000}');
//! viewer.setLeft(new Uint8Array(await leftFile.arrayBuffer()));
//! viewer.setRight(new Uint8Array(await rightFile.arrayBuffer()));
//!
//! const result = viewer.recompute();
//! if (result === undefined || result.limitExceeded) {
//!     showMessage(viewer.statusText());
//! } else {
//!     for (let i = 0; i < viewer.lineCount; i++) {
//!         render(viewer.renderLine(i, "left"), viewer.renderLine(i, "right"));
//!     }
//! }
//!
//! // 次の差分へ
//! const id = viewer.next();
//! ```

use wasm_bindgen::prelude::*;

pub mod json;
mod logger;
pub mod viewer;

pub use viewer::BinDiffViewer;

/// パニック時にブラウザコンソールにスタックトレースを出力する
///
/// 開発時に必ず呼び出すこと。本番ビルドでは feature flag で無効化可能。
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// `log` の出力をコンソールに接続する
///
/// # 引数
/// - `level`: `"error"` / `"warn"` / `"info"` / `"debug"` / `"trace"` / `"off"`。省略時は `"info"`
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) -> Result<(), JsError> {
    let filter = match level.as_deref() {
        None => log::LevelFilter::Info,
        Some(name) => name
            .parse::<log::LevelFilter>()
            .map_err(|_| JsError::new(&format!("Invalid log level: {}", name)))?,
    };
    logger::init(filter);
    Ok(())
}

/// 2 つのバイト列の差分を 1 回だけ計算する
///
/// # 引数
/// - `left`, `right`: 比較するファイル内容
/// - `options_json`: 差分オプション（省略時はデフォルト）
///
/// # 戻り値
/// `DiffResult` の JS オブジェクト `{ lines, limitExceeded }`
#[wasm_bindgen(js_name = "diffBytes")]
pub fn diff_bytes(left: &[u8], right: &[u8], options_json: Option<String>) -> Result<JsValue, JsError> {
    let options = json::parse_options(options_json.as_deref())
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
    let result = bindiff_core::diff(left, right, &options)
        .map_err(|e| JsError::new(&format!("Diff failed: {}", e)))?;
    let encoded = json::result_to_json(&result)
        .map_err(|e| JsError::new(&format!("Result encode failed: {}", e)))?;
    js_sys::JSON::parse(&encoded).map_err(|_| JsError::new("Result encode failed: invalid JSON"))
}

/// アドレスを 8 桁の 16 進数にする（省略時は空白 8 文字）
#[wasm_bindgen(js_name = "formatAddress")]
pub fn format_address(address: Option<u32>) -> String {
    bindiff_core::format_address(address.map(|a| a as usize))
}

/// バイトを 2 桁の 16 進数にする（省略時は空白 2 文字）
#[wasm_bindgen(js_name = "formatByte")]
pub fn format_byte(byte: Option<u8>) -> String {
    bindiff_core::format_byte(byte)
}

/// バイトの表示文字（印字可能 ASCII 以外は '.'、省略時は空白）
#[wasm_bindgen(js_name = "byteGlyph")]
pub fn byte_glyph(byte: Option<u8>) -> char {
    bindiff_core::byte_glyph(byte)
}
