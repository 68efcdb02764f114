//! 名簿マネージャ
//!
//! 招待客リストと検索語を持ち、変更のたびにリストを [`KvStore`] へ書き込んで
//! リスナーに通知する。書き込み失敗はログに残すだけで無視する。

use crate::codec::{json, xlsx, ImportFormat};
use crate::error::Result;
use crate::filter::filter_guests;
use crate::store::{KvStore, STORAGE_KEY};
use crate::types::{seed_guests, Guest};
use serde_json::Value;

/// リスナーに渡す状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterState {
    pub guests: Vec<Guest>,
    pub search_term: String,
}

impl RosterState {
    /// 現在の検索語に一致する招待客
    pub fn filtered(&self) -> Vec<&Guest> {
        filter_guests(&self.guests, &self.search_term)
    }
}

pub type Listener = Box<dyn Fn(&RosterState) + Send + Sync>;

pub struct GuestRoster<S: KvStore> {
    store: S,
    state: RosterState,
    listeners: Vec<Listener>,
}

impl<S: KvStore> GuestRoster<S> {
    /// 保存済みの名簿を読む。スロットが無い・JSON配列でない場合は初期リスト
    pub fn load(store: S) -> Self {
        let guests = match store.get(STORAGE_KEY) {
            Some(raw) => match json::decode(raw.as_bytes()) {
                Ok(guests) => {
                    tracing::debug!(count = guests.len(), "loaded stored roster");
                    guests
                }
                Err(e) => {
                    tracing::debug!(error = %e, "stored roster unreadable, using seed list");
                    seed_guests()
                }
            },
            None => {
                tracing::debug!("no stored roster, using seed list");
                seed_guests()
            }
        };

        Self {
            store,
            state: RosterState {
                guests,
                search_term: String::new(),
            },
            listeners: Vec::new(),
        }
    }

    pub fn guests(&self) -> &[Guest] {
        &self.state.guests
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    pub fn filtered(&self) -> Vec<&Guest> {
        self.state.filtered()
    }

    /// 変更のたびに呼ばれるコールバックを登録
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&RosterState) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// この `id` を持つ全員の確認フラグを反転。該当なしなら何も変わらない
    pub fn toggle_confirmed(&mut self, id: impl Into<Value>) {
        let id = id.into();
        for guest in self.state.guests.iter_mut().filter(|g| g.has_id(&id)) {
            guest.toggle_confirmed();
        }
        self.persist();
        self.notify();
    }

    /// 初期リストに戻す。保存エントリは上書きせず削除する
    pub fn reset(&mut self) {
        self.state.guests = seed_guests();
        if let Err(e) = self.store.delete(STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to clear stored roster");
        }
        tracing::info!("roster reset to seed list");
        self.notify();
    }

    /// 名簿を丸ごと置き換える。IDの整合は取らない
    pub fn replace(&mut self, guests: Vec<Guest>) {
        self.state.guests = guests;
        self.persist();
        self.notify();
    }

    /// アップロードされたファイルをデコードして名簿を置き換える。
    /// エラー時は名簿をそのまま残す
    pub fn import_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        let format = ImportFormat::from_file_name(file_name)?;
        let guests = format.decode(bytes)?;
        tracing::info!(file = file_name, format = format.as_str(), count = guests.len(), "roster imported");
        self.replace(guests);
        Ok(())
    }

    pub fn export_xlsx(&self) -> Result<Vec<u8>> {
        xlsx::encode(&self.state.guests)
    }

    pub fn export_json(&self) -> Result<Vec<u8>> {
        json::encode(&self.state.guests)
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.state.search_term = text.into();
        self.notify();
    }

    fn persist(&mut self) {
        let serialized = match json::encode_compact(&self.state.guests) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize roster");
                return;
            }
        };
        match self.store.set(STORAGE_KEY, &serialized) {
            Ok(()) => tracing::debug!(bytes = serialized.len(), "roster stored"),
            Err(e) => tracing::warn!(error = %e, "failed to store roster"),
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn seeded() -> GuestRoster<MemoryStore> {
        GuestRoster::load(MemoryStore::new())
    }

    // =============================================
    // load
    // =============================================

    #[test]
    fn test_load_empty_store_uses_seed() {
        let roster = seeded();
        assert_eq!(roster.guests(), seed_guests().as_slice());
        assert!(!roster.store().contains(STORAGE_KEY));
    }

    #[test]
    fn test_load_stored_roster() {
        let store = MemoryStore::with_entry(STORAGE_KEY, r#"[{"id":10,"nome":"Rita","rg":"5","confirmado":true}]"#);
        let roster = GuestRoster::load(store);
        assert_eq!(roster.guests(), &[Guest::new(10, "Rita", "5", true)]);
    }

    #[test]
    fn test_load_malformed_falls_back_to_seed() {
        for raw in ["{", r#"{"id":1}"#, "42", "null", ""] {
            let roster = GuestRoster::load(MemoryStore::with_entry(STORAGE_KEY, raw));
            assert_eq!(roster.guests(), seed_guests().as_slice(), "stored {:?}", raw);
        }
    }

    #[test]
    fn test_load_keeps_non_object_elements() {
        let store = MemoryStore::with_entry(STORAGE_KEY, r#"[{"id":1,"nome":"X"},null]"#);
        let roster = GuestRoster::load(store);
        assert_eq!(roster.guests().len(), 2);
        assert_eq!(roster.guests()[1].as_value(), &Value::Null);
    }

    // =============================================
    // toggle_confirmed
    // =============================================

    #[test]
    fn test_toggle_flips_only_target() {
        let mut roster = seeded();
        roster.toggle_confirmed(3);

        for (before, after) in seed_guests().iter().zip(roster.guests()) {
            if before.numeric_id() == Some(3) {
                assert!(after.is_confirmed());
                assert_eq!(after.name(), before.name());
                assert_eq!(after.identifier(), before.identifier());
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut roster = seeded();
        roster.toggle_confirmed(3);
        roster.toggle_confirmed(3);
        assert_eq!(roster.guests(), seed_guests().as_slice());
    }

    #[test]
    fn test_toggle_unknown_id_changes_nothing() {
        let mut roster = seeded();
        roster.toggle_confirmed(99);
        assert_eq!(roster.guests(), seed_guests().as_slice());
    }

    #[test]
    fn test_toggle_persists() {
        let mut roster = seeded();
        roster.toggle_confirmed(1);

        let stored = roster.store().get(STORAGE_KEY).unwrap();
        let reloaded = GuestRoster::load(MemoryStore::with_entry(STORAGE_KEY, &stored));
        assert!(reloaded.guests()[0].is_confirmed());
    }

    #[test]
    fn test_toggle_matches_float_and_string_ids() {
        let mut roster = seeded();
        roster
            .import_file("lista.json", br#"[{"id":1.0,"nome":"A"},{"id":"b2","nome":"B"}]"#)
            .unwrap();

        roster.toggle_confirmed(1);
        roster.toggle_confirmed("b2");
        assert!(roster.guests().iter().all(Guest::is_confirmed));
    }

    #[test]
    fn test_toggle_duplicate_ids_flips_all() {
        let mut roster = seeded();
        roster
            .import_file("lista.json", br#"[{"id":1,"nome":"A"},{"id":1,"nome":"B"},{"id":2}]"#)
            .unwrap();
        roster.toggle_confirmed(1);

        let flags: Vec<bool> = roster.guests().iter().map(Guest::is_confirmed).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    // =============================================
    // reset
    // =============================================

    #[test]
    fn test_reset_restores_seed_and_clears_store() {
        let mut roster = seeded();
        roster.toggle_confirmed(2);
        assert!(roster.store().contains(STORAGE_KEY));

        roster.reset();
        assert_eq!(roster.guests(), seed_guests().as_slice());
        assert!(!roster.store().contains(STORAGE_KEY));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut roster = seeded();
        roster.replace(vec![Guest::new(1, "Só", "", true)]);
        roster.reset();
        let once = roster.state().clone();
        roster.reset();
        assert_eq!(roster.state(), &once);
    }

    // =============================================
    // import / export
    // =============================================

    #[test]
    fn test_import_json_replaces_as_given() {
        let mut roster = seeded();
        roster.import_file("lista.json", br#"[{"id":1,"nome":"X"}]"#).unwrap();

        assert_eq!(roster.guests().len(), 1);
        let exported = String::from_utf8(roster.export_json().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(value, serde_json::json!([{"id": 1, "nome": "X"}]));
    }

    #[test]
    fn test_import_json_mixed_elements_roundtrip() {
        let mut roster = seeded();
        roster.import_file("lista.json", br#"[{"id":1,"nome":"X"}, 7, "y"]"#).unwrap();
        assert_eq!(roster.guests().len(), 3);

        let stored = roster.store().get(STORAGE_KEY).unwrap();
        assert_eq!(stored, r#"[{"id":1,"nome":"X"},7,"y"]"#);

        let reloaded = GuestRoster::load(MemoryStore::with_entry(STORAGE_KEY, &stored));
        assert_eq!(reloaded.guests(), roster.guests());

        let mut target = seeded();
        target.import_file("copia.json", &roster.export_json().unwrap()).unwrap();
        assert_eq!(target.guests(), roster.guests());
    }

    #[test]
    fn test_import_json_keeps_key_order() {
        let mut roster = seeded();
        roster.import_file("lista.json", br#"[{"nome":"X","id":1}]"#).unwrap();
        roster.toggle_confirmed(1);
        assert_eq!(
            roster.store().get(STORAGE_KEY).as_deref(),
            Some(r#"[{"nome":"X","id":1,"confirmado":true}]"#)
        );
    }

    #[test]
    fn test_import_errors_leave_roster_unchanged() {
        let mut roster = seeded();
        roster.toggle_confirmed(4);
        let before = roster.guests().to_vec();

        let err = roster.import_file("lista.json", br#"{"nome":"X"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidJson));
        let err = roster.import_file("lista.json", b"[{").unwrap_err();
        assert!(matches!(err, Error::JsonRead(_)));
        let err = roster.import_file("lista.pdf", b"%PDF").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));

        assert_eq!(roster.guests(), before.as_slice());
    }

    #[test]
    fn test_json_export_import_roundtrip() {
        let mut source = seeded();
        source.toggle_confirmed(2);
        source.toggle_confirmed(5);
        let bytes = source.export_json().unwrap();

        let mut target = GuestRoster::load(MemoryStore::new());
        target.import_file("convidados.json", &bytes).unwrap();
        assert_eq!(target.guests(), source.guests());
    }

    #[test]
    fn test_xlsx_export_import_roundtrip() {
        let mut source = seeded();
        source.toggle_confirmed(1);
        let bytes = source.export_xlsx().unwrap();

        let mut target = seeded();
        target.import_file(xlsx::EXPORT_FILE_NAME, &bytes).unwrap();
        assert_eq!(target.guests(), source.guests());
    }

    #[test]
    fn test_last_import_wins() {
        let mut roster = seeded();
        roster.import_file("a.json", br#"[{"id":1,"nome":"First"}]"#).unwrap();
        roster.import_file("b.json", br#"[{"id":1,"nome":"Second"}]"#).unwrap();
        assert_eq!(roster.guests()[0].name(), Some("Second"));
    }

    // =============================================
    // search / listeners
    // =============================================

    #[test]
    fn test_search_is_not_persisted() {
        let mut roster = seeded();
        roster.set_search_term("ana");
        assert!(!roster.store().contains(STORAGE_KEY));

        let names: Vec<_> = roster.filtered().iter().map(|g| g.name_or_empty()).collect();
        assert_eq!(names, vec!["Ana Clara"]);

        roster.set_search_term("zzz");
        assert!(roster.filtered().is_empty());

        roster.set_search_term("");
        assert_eq!(roster.filtered().len(), 5);
    }

    #[test]
    fn test_listeners_see_every_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut roster = seeded();
        {
            let calls = Arc::clone(&calls);
            roster.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        roster.toggle_confirmed(1);
        roster.set_search_term("b");
        roster.reset();
        roster.import_file("x.json", b"[]").unwrap();
        let _ = roster.import_file("x.csv", b"");

        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_listener_receives_new_state() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut roster = seeded();
        {
            let seen = Arc::clone(&seen);
            roster.subscribe(move |state| {
                seen.lock().unwrap().push(state.guests.len());
            });
        }

        roster.replace(vec![Guest::new(1, "Um", "", false)]);
        roster.reset();
        assert_eq!(*seen.lock().unwrap(), vec![1, 5]);
    }
}
