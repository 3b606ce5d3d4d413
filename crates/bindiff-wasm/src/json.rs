//! JS とやり取りする JSON の変換
//!
//! wasm-bindgen に依存しない部分なので native テストから呼べる。

use bindiff_core::{render_side, DiffError, DiffLine, DiffOptions, DiffResult, Side};

/// オプション JSON を解析して検証する
///
/// None・空文字列はデフォルトオプション。
///
/// # エラー
/// - `DiffError::InvalidOptions`: JSON が不正
/// - その他 `DiffOptions::validate` のエラー
pub fn parse_options(json: Option<&str>) -> Result<DiffOptions, DiffError> {
    let options = match json.map(str::trim) {
        None | Some("") => DiffOptions::default(),
        Some(text) => serde_json::from_str::<DiffOptions>(text)
            .map_err(|e| DiffError::InvalidOptions(e.to_string()))?,
    };
    options.validate()?;
    Ok(options)
}

/// `"left"` / `"right"` を `Side` に変換する
pub fn parse_side(side: &str) -> Option<Side> {
    match side {
        "left" => Some(Side::Left),
        "right" => Some(Side::Right),
        _ => None,
    }
}

/// 差分結果を JSON 文字列にする
pub fn result_to_json(result: &DiffResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// 1 行の片側を表示用 JSON にする
pub fn rendered_side_to_json(
    line: &DiffLine,
    side: Side,
    line_width: usize,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&render_side(line, side, line_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindiff_core::AlignStrategy;

    #[test]
    fn test_parse_options_defaults() {
        assert_eq!(parse_options(None), Ok(DiffOptions::default()));
        assert_eq!(parse_options(Some("  ")), Ok(DiffOptions::default()));
        assert_eq!(parse_options(Some("{}")), Ok(DiffOptions::default()));
    }

    #[test]
    fn test_parse_options_fields() {
        let opts = parse_options(Some(
            r#"{"lineWidth": 8, "differenceLineLimit": 100, "strategy": "editScript"}"#,
        ))
        .unwrap();
        assert_eq!(opts.line_width, 8);
        assert_eq!(opts.difference_line_limit, Some(100));
        assert_eq!(opts.strategy, AlignStrategy::EditScript);
        assert_eq!(opts.lookahead_window, 100);
    }

    #[test]
    fn test_parse_options_errors() {
        assert!(matches!(
            parse_options(Some("{not json")),
            Err(DiffError::InvalidOptions(_))
        ));
        assert_eq!(
            parse_options(Some(r#"{"lineWidth": 0}"#)),
            Err(DiffError::InvalidLineWidth)
        );
    }

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("left"), Some(Side::Left));
        assert_eq!(parse_side("right"), Some(Side::Right));
        assert_eq!(parse_side("middle"), None);
    }

    #[test]
    fn test_result_json_shape() {
        let result = bindiff_core::diff_bytes(b"ABC", b"AXC");
        let json = result_to_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["limitExceeded"], false);
        let line = &value["lines"][0];
        assert_eq!(line["id"], 0);
        assert_eq!(line["offsetLeft"], 0);
        let cell = &line["cells"][1];
        assert_eq!(cell["kind"], "changed");
        assert_eq!(cell["leftByte"], 0x42);
        assert_eq!(cell["rightByte"], 0x58);
    }

    #[test]
    fn test_rendered_side_json() {
        let result = bindiff_core::diff_bytes(b"", b"A");
        let json = rendered_side_to_json(&result.lines[0], Side::Left, 16).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["address"], "        ");
        assert_eq!(value["hex"].as_array().map(|a| a.len()), Some(16));
        assert_eq!(value["kinds"][0], "inserted");
        assert!(value["kinds"][1].is_null());
    }
}
