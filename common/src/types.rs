//! 招待客レコードと初期リスト
//!
//! CLIとWeb(WASM)で共有される型:
//! - Guest: 1件分のレコード（JSON値をそのまま保持）
//! - seed_guests: 初回起動時とリセット時のリスト
//!
//! JSONインポートは受け取った内容を加工せずに持つため、フィールドは
//! 構造体に展開せずアクセサ経由で読む。キー順もそのまま残る。

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "nome";
pub const FIELD_IDENTIFIER: &str = "rg";
pub const FIELD_CONFIRMED: &str = "confirmado";

/// `nome` セルが使えない表計算行に付ける名前
pub const DEFAULT_NAME: &str = "No Name";

/// 招待客1件
///
/// 中身はJSON値そのもの。オブジェクト以外の要素（数値・文字列・null）も
/// 名前もIDもない行として保持し、保存時にはそのまま書き戻す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guest(Value);

impl Default for Guest {
    /// フィールドを持たない空のレコード
    fn default() -> Self {
        Guest(Value::Object(Map::new()))
    }
}

impl Guest {
    pub fn new(id: i64, name: impl Into<String>, identifier: impl Into<String>, confirmed: bool) -> Self {
        let name: String = name.into();
        let identifier: String = identifier.into();
        Guest(json!({
            "id": id,
            "nome": name,
            "rg": identifier,
            "confirmado": confirmed,
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// オブジェクト要素ならそのフィールド
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields()?.get(key)
    }

    /// `id` の値（null・欠落は None）
    pub fn id(&self) -> Option<&Value> {
        self.get(FIELD_ID).filter(|v| !v.is_null())
    }

    /// 整数として読める `id`。`1.0` も 1 として扱う
    pub fn numeric_id(&self) -> Option<i64> {
        let id = self.id()?;
        id.as_i64().or_else(|| {
            id.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }

    /// 一覧表示用のID文字列
    pub fn id_label(&self) -> Option<String> {
        if let Some(n) = self.numeric_id() {
            return Some(n.to_string());
        }
        self.id().map(value_text)
    }

    /// `id` が一致するか。数値同士は 1 と 1.0 を同じとみなす
    pub fn has_id(&self, id: &Value) -> bool {
        self.id().is_some_and(|own| same_id(own, id))
    }

    pub fn name(&self) -> Option<&str> {
        self.get(FIELD_NAME)?.as_str()
    }

    pub fn name_or_empty(&self) -> &str {
        self.name().unwrap_or("")
    }

    pub fn identifier(&self) -> Option<&str> {
        self.get(FIELD_IDENTIFIER)?.as_str()
    }

    /// RG欄の表示文字列（数値もそのまま文字にする）
    pub fn identifier_text(&self) -> String {
        self.get(FIELD_IDENTIFIER)
            .filter(|v| !v.is_null())
            .map(value_text)
            .unwrap_or_default()
    }

    /// `confirmado` の真偽。欠落・false・0・空文字は未確認
    pub fn is_confirmed(&self) -> bool {
        truthy(self.get(FIELD_CONFIRMED))
    }

    /// 確認フラグを反転する。既存キーは位置を保ったまま上書き、
    /// 無ければ末尾に追加。オブジェクト以外は何もしない
    pub fn toggle_confirmed(&mut self) {
        if let Value::Object(fields) = &mut self.0 {
            let next = !truthy(fields.get(FIELD_CONFIRMED));
            fields.insert(FIELD_CONFIRMED.to_string(), Value::Bool(next));
        }
    }

    /// 名前の部分一致（`needle_lowercase` は小文字化済み）
    pub fn name_matches(&self, needle_lowercase: &str) -> bool {
        self.name_or_empty().to_lowercase().contains(needle_lowercase)
    }
}

impl From<Value> for Guest {
    fn from(value: Value) -> Self {
        Guest(value)
    }
}

impl From<Map<String, Value>> for Guest {
    fn from(fields: Map<String, Value>) -> Self {
        Guest(Value::Object(fields))
    }
}

fn same_id(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 初回起動時とリセット後に使う5件
pub fn seed_guests() -> Vec<Guest> {
    vec![
        Guest::new(1, "Ana Clara", "123456789", false),
        Guest::new(2, "Bruno Silva", "987654321", false),
        Guest::new(3, "Carlos Souza", "456789123", false),
        Guest::new(4, "Daniela Lima", "321654987", false),
        Guest::new(5, "Eduardo Ramos", "654123789", false),
    ]
}
