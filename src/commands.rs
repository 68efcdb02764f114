//! サブコマンドの本体（任意のストアの名簿に対して動く）

use crate::cli::ExportFormat;
use crate::error::{ChecklistError, Result};
use convidados_common::{Guest, GuestRoster, KvStore, RosterState, NO_MATCH_PLACEHOLDER};
use std::path::{Path, PathBuf};

/// 招待客1人につき1行: `[x]   3  Carlos Souza  RG: 456789123`
pub fn format_guest(guest: &Guest) -> String {
    let mark = if guest.is_confirmed() { "x" } else { " " };
    let id = guest.id_label().unwrap_or_else(|| "-".to_string());
    format!(
        "[{}] {:>3}  {}  RG: {}",
        mark,
        id,
        guest.name_or_empty(),
        guest.identifier_text()
    )
}

/// `list` が表示する絞り込み結果。空なら代わりの文言
pub fn render_list(state: &RosterState) -> String {
    let visible = state.filtered();
    if visible.is_empty() {
        return NO_MATCH_PLACEHOLDER.to_string();
    }
    visible
        .into_iter()
        .map(format_guest)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn list<S: KvStore>(roster: &mut GuestRoster<S>, search: Option<&str>) -> String {
    if let Some(term) = search {
        roster.set_search_term(term);
    }
    render_list(roster.state())
}

pub fn confirmed_count(guests: &[Guest]) -> usize {
    guests.iter().filter(|g| g.is_confirmed()).count()
}

/// デフォルトの出力先: 設定のファイル名に `format` の拡張子を付けたもの
pub fn default_export_path(file_name: &str, format: ExportFormat) -> PathBuf {
    Path::new(file_name).with_extension(format.extension())
}

pub fn export<S: KvStore>(roster: &GuestRoster<S>, output: &Path, format: ExportFormat) -> Result<()> {
    let bytes = match format {
        ExportFormat::Xlsx => roster.export_xlsx()?,
        ExportFormat::Json => roster.export_json()?,
    };
    std::fs::write(output, bytes)?;
    tracing::info!(path = %output.display(), format = %format, "roster exported");
    Ok(())
}

pub fn import<S: KvStore>(roster: &mut GuestRoster<S>, input: &Path) -> Result<usize> {
    if !input.exists() {
        return Err(ChecklistError::FileNotFound(input.display().to_string()));
    }

    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let bytes = std::fs::read(input)?;
    roster.import_file(file_name, &bytes)?;
    Ok(roster.guests().len())
}
