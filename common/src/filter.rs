//! 名前検索

use crate::types::Guest;

/// 該当者がいないときにリストの代わりに表示する文言
pub const NO_MATCH_PLACEHOLDER: &str = "no guest found";

/// 名前（小文字化）に `term`（小文字化）を含むレコードを名簿順で返す。
///
/// 空の検索語なら全件。trim はしないので `" "` は空白を含む名前だけに一致する。
pub fn filter_guests<'a>(guests: &'a [Guest], term: &str) -> Vec<&'a Guest> {
    if term.is_empty() {
        return guests.iter().collect();
    }

    let needle = term.to_lowercase();
    guests.iter().filter(|g| g.name_matches(&needle)).collect()
}
