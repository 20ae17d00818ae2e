//! Integration tests for `JsonStore` against a temp directory.

use leadbook_core::{
  lead::{Lead, LeadPatch, LeadStatus, NewLead},
  store::LeadStore,
};
use tempfile::TempDir;

use crate::{Error, JsonStore};

fn store() -> (TempDir, JsonStore) {
  let dir = tempfile::tempdir().expect("tempdir");
  let store = JsonStore::new(dir.path().join("leads.json"));
  (dir, store)
}

fn lead(name: &str, company: &str) -> Lead {
  Lead::create(NewLead {
    name: Some(name.into()),
    email: Some(format!("{}@example.com", name.to_lowercase())),
    company: Some(company.into()),
    ..Default::default()
  })
  .expect("valid creation input")
}

// ─── First-run bootstrap ─────────────────────────────────────────────────────

#[tokio::test]
async fn load_all_on_missing_file_returns_empty() {
  let (_dir, s) = store();
  let leads = s.load_all().await.unwrap();
  assert!(leads.is_empty());
}

#[tokio::test]
async fn append_creates_missing_parent_directory() {
  let dir = tempfile::tempdir().expect("tempdir");
  let s = JsonStore::new(dir.path().join("nested/data/leads.json"));

  s.append(lead("Ann", "Acme")).await.unwrap();
  assert_eq!(s.load_all().await.unwrap().len(), 1);
}

// ─── Append and load ─────────────────────────────────────────────────────────

#[tokio::test]
async fn append_then_load_round_trips_all_fields() {
  let (_dir, s) = store();

  let mut created = lead("Ann", "Acme");
  created.notes = "met at conf".into();
  s.append(created.clone()).await.unwrap();

  let leads = s.load_all().await.unwrap();
  assert_eq!(leads.len(), 1);

  let got = &leads[0];
  assert_eq!(got.id, created.id);
  assert_eq!(got.name, "Ann");
  assert_eq!(got.email, "ann@example.com");
  assert_eq!(got.company, "Acme");
  assert_eq!(got.notes, "met at conf");
  assert_eq!(got.status, LeadStatus::New);
  assert_eq!(got.created_at, created.created_at);
}

#[tokio::test]
async fn append_preserves_insertion_order() {
  let (_dir, s) = store();

  s.append(lead("Ann", "Acme")).await.unwrap();
  s.append(lead("Bo", "X")).await.unwrap();
  s.append(lead("Cy", "Initech")).await.unwrap();

  let names: Vec<_> = s
    .load_all()
    .await
    .unwrap()
    .into_iter()
    .map(|l| l.name)
    .collect();
  assert_eq!(names, ["Ann", "Bo", "Cy"]);
}

#[tokio::test]
async fn save_all_of_load_all_leaves_file_bytes_unchanged() {
  let (_dir, s) = store();
  s.append(lead("Ann", "Acme")).await.unwrap();
  s.append(lead("Bo", "X")).await.unwrap();

  let before = tokio::fs::read(s.path()).await.unwrap();
  let snapshot = s.load_all().await.unwrap();
  s.save_all(snapshot).await.unwrap();
  let after = tokio::fs::read(s.path()).await.unwrap();

  assert_eq!(before, after);
}

#[tokio::test]
async fn persisted_file_is_pretty_printed() {
  let (_dir, s) = store();
  s.append(lead("Ann", "Acme")).await.unwrap();

  let raw = tokio::fs::read_to_string(s.path()).await.unwrap();
  assert!(raw.starts_with("[\n"));
  assert!(raw.contains("\n  "));
}

// ─── Updates ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_by_id_applies_status_and_notes() {
  let (_dir, s) = store();
  let created = lead("Ann", "Acme");
  s.append(created.clone()).await.unwrap();

  let updated = s
    .update_by_id(
      &created.id,
      LeadPatch {
        status: Some(LeadStatus::Contacted),
        notes: Some("left voicemail".into()),
      },
    )
    .await
    .unwrap()
    .expect("lead exists");

  assert_eq!(updated.status, LeadStatus::Contacted);
  assert_eq!(updated.notes, "left voicemail");

  // The change is durable, not just in the returned record.
  let reloaded = s.load_all().await.unwrap();
  assert_eq!(reloaded[0].status, LeadStatus::Contacted);
  assert_eq!(reloaded[0].notes, "left voicemail");
}

#[tokio::test]
async fn update_by_id_with_partial_patch_leaves_other_field() {
  let (_dir, s) = store();
  let created = lead("Ann", "Acme");
  s.append(created.clone()).await.unwrap();

  let updated = s
    .update_by_id(
      &created.id,
      LeadPatch {
        status: None,
        notes: Some("only notes".into()),
      },
    )
    .await
    .unwrap()
    .expect("lead exists");

  assert_eq!(updated.status, LeadStatus::New);
  assert_eq!(updated.notes, "only notes");
}

#[tokio::test]
async fn update_by_id_with_empty_patch_returns_record_unchanged() {
  let (_dir, s) = store();
  let created = lead("Ann", "Acme");
  s.append(created.clone()).await.unwrap();

  let updated = s
    .update_by_id(&created.id, LeadPatch::default())
    .await
    .unwrap()
    .expect("lead exists");

  assert_eq!(updated.status, created.status);
  assert_eq!(updated.notes, created.notes);
}

#[tokio::test]
async fn update_by_id_unknown_id_returns_none_and_writes_nothing() {
  let (_dir, s) = store();
  s.append(lead("Ann", "Acme")).await.unwrap();
  let before = tokio::fs::read(s.path()).await.unwrap();

  let result = s
    .update_by_id(
      "no-such-id",
      LeadPatch {
        status: Some(LeadStatus::Lost),
        notes: None,
      },
    )
    .await
    .unwrap();

  assert!(result.is_none());
  let after = tokio::fs::read(s.path()).await.unwrap();
  assert_eq!(before, after);
}

#[tokio::test]
async fn update_by_id_matches_exactly() {
  let (_dir, s) = store();
  let created = lead("Ann", "Acme");
  s.append(created.clone()).await.unwrap();

  let prefix = &created.id[..created.id.len() - 1];
  let result = s
    .update_by_id(prefix, LeadPatch::default())
    .await
    .unwrap();
  assert!(result.is_none());
}

// ─── Failure modes ───────────────────────────────────────────────────────────

#[tokio::test]
async fn corrupt_file_surfaces_corrupt_error() {
  let (_dir, s) = store();
  tokio::fs::write(s.path(), b"{ not json").await.unwrap();

  let err = s.load_all().await.unwrap_err();
  assert!(matches!(err, Error::Corrupt { .. }));
}

#[tokio::test]
async fn corrupt_file_fails_mutations_too() {
  let (_dir, s) = store();
  tokio::fs::write(s.path(), b"42").await.unwrap();

  let err = s.append(lead("Ann", "Acme")).await.unwrap_err();
  assert!(matches!(err, Error::Corrupt { .. }));
}

#[tokio::test]
async fn no_temp_files_left_behind_after_writes() {
  let (dir, s) = store();
  s.append(lead("Ann", "Acme")).await.unwrap();
  s.append(lead("Bo", "X")).await.unwrap();

  let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
  let mut names = Vec::new();
  while let Some(entry) = entries.next_entry().await.unwrap() {
    names.push(entry.file_name().to_string_lossy().into_owned());
  }
  assert_eq!(names, ["leads.json"]);
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn concurrent_appends_lose_no_records() {
  let (_dir, s) = store();

  let mut handles = Vec::new();
  for i in 0..16 {
    let s = s.clone();
    handles.push(tokio::spawn(async move {
      s.append(lead(&format!("Lead{i}"), "Acme")).await
    }));
  }
  for handle in handles {
    handle.await.unwrap().unwrap();
  }

  assert_eq!(s.load_all().await.unwrap().len(), 16);
}
