//! E2E Integration Tests
//!
//! 以暫存資料夾模擬 SD 卡、備份卡與目的地，測試完整流程

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use sony_photo_organize::OrganizeError;
use sony_photo_organize::WorkflowStage;
use sony_photo_organize::component::PhotoWorkflow;
use sony_photo_organize::component::photo_workflow::WorkflowContext;
use sony_photo_organize::tools::VolumeEjector;
use tempfile::TempDir;

/// 記錄被要求退出的磁碟區，可設定為失敗
#[derive(Clone, Default)]
struct RecordingEjector {
    calls: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl VolumeEjector for RecordingEjector {
    fn is_supported(&self) -> bool {
        true
    }

    fn eject(&self, volume_name: &str) -> sony_photo_organize::Result<()> {
        self.calls.borrow_mut().push(volume_name.to_string());
        if self.fail {
            return Err(OrganizeError::Eject {
                volume: volume_name.to_string(),
                message: "exit status: 1\nOutput: Volume busy".to_string(),
            });
        }
        Ok(())
    }
}

struct Fixture {
    _root: TempDir,
    context: WorkflowContext,
}

impl Fixture {
    /// 建立 SD 卡、備份卡與目的地
    ///
    /// SD 卡上有兩個相機目錄、一個非相機目錄與一個散落的檔案。
    fn new(dry_run: bool) -> Self {
        let root = TempDir::new().unwrap();
        let target = root.path().join("1-1");
        let backup = root.path().join("1-2");
        let destination = root.path().join("a7iii");
        let tmp_dir = root.path().join("Pictures").join("tmp");

        let dcim = target.join("DCIM");
        write_file(&dcim.join("02512310").join("DSC00001.ARW"), b"raw-1");
        write_file(&dcim.join("02512310").join("DSC00001.JPG"), b"jpg-1");
        write_file(&dcim.join("02406150").join("DSC00002.ARW"), b"raw-2");
        write_file(&dcim.join("100MSDCF").join("DSC00003.JPG"), b"jpg-3");
        write_file(&dcim.join("notes.txt"), b"notes");

        write_file(&backup.join("DCIM").join("02512310").join("DSC00001.ARW"), b"raw-1");
        fs::create_dir_all(&destination).unwrap();

        let context = WorkflowContext {
            target_path: target,
            backup_path: backup,
            destination_path: destination,
            tmp_dir,
            dry_run,
        };
        Self {
            _root: root,
            context,
        }
    }

    fn source_dcim(&self) -> PathBuf {
        self.context.source_dcim()
    }
}

fn write_file(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

fn workflow_with(ejector: &RecordingEjector) -> PhotoWorkflow {
    PhotoWorkflow::new(Box::new(ejector.clone())).with_century_prefix("20")
}

#[test]
fn test_full_workflow() {
    let fixture = Fixture::new(false);
    let ejector = RecordingEjector::default();

    let report = workflow_with(&ejector).run(&fixture.context).unwrap();

    let destination = &fixture.context.destination_path;
    assert_eq!(
        fs::read(destination.join("2025-12-31").join("DSC00001.ARW")).unwrap(),
        b"raw-1"
    );
    assert_eq!(
        fs::read(destination.join("2025-12-31").join("DSC00001.JPG")).unwrap(),
        b"jpg-1"
    );
    assert_eq!(
        fs::read(destination.join("2024-06-15").join("DSC00002.ARW")).unwrap(),
        b"raw-2"
    );
    // 非相機目錄與檔案原樣複製
    assert!(destination.join("100MSDCF").join("DSC00003.JPG").exists());
    assert!(destination.join("notes.txt").exists());
    assert!(!destination.join("02512310").exists());

    // 來源與暫存資料夾被清空但保留
    assert!(fixture.source_dcim().is_dir());
    assert_eq!(entry_count(&fixture.source_dcim()), 0);
    assert!(fixture.context.tmp_dir.is_dir());
    assert_eq!(entry_count(&fixture.context.tmp_dir), 0);

    let rename = report.rename.unwrap();
    assert_eq!(rename.renamed_count(), 2);
    assert_eq!(rename.skipped_count(), 1);
    assert!(report.eject_warning.is_none());
    assert_eq!(*ejector.calls.borrow(), vec!["1-1".to_string()]);
}

#[test]
fn test_dry_run_changes_nothing() {
    let fixture = Fixture::new(true);
    let ejector = RecordingEjector::default();

    let report = workflow_with(&ejector).run(&fixture.context).unwrap();

    assert!(report.rename.is_none());
    assert!(!fixture.context.tmp_dir.exists());
    assert_eq!(entry_count(&fixture.context.destination_path), 0);
    assert_eq!(entry_count(&fixture.source_dcim()), 4);
    assert!(fixture.source_dcim().join("02512310").join("DSC00001.ARW").exists());
    assert!(ejector.calls.borrow().is_empty());
}

#[test]
fn test_missing_destination_aborts_before_mutation() {
    let fixture = Fixture::new(false);
    fs::remove_dir(&fixture.context.destination_path).unwrap();
    let ejector = RecordingEjector::default();

    let err = workflow_with(&ejector).run(&fixture.context).unwrap_err();

    assert!(matches!(err, OrganizeError::DestinationMissing(_)));
    assert!(matches!(err.root(), OrganizeError::NotFound(_)));
    assert!(!fixture.context.tmp_dir.exists());
    assert_eq!(entry_count(&fixture.source_dcim()), 4);
    assert!(ejector.calls.borrow().is_empty());
}

#[test]
fn test_missing_source_dcim_aborts_before_mutation() {
    let fixture = Fixture::new(false);
    fs::remove_dir_all(fixture.source_dcim()).unwrap();
    let ejector = RecordingEjector::default();

    let err = workflow_with(&ejector).run(&fixture.context).unwrap_err();

    assert!(matches!(err, OrganizeError::SourceMissing(_)));
    assert!(!fixture.context.tmp_dir.exists());
    assert_eq!(entry_count(&fixture.context.destination_path), 0);
}

#[test]
fn test_source_dcim_is_file() {
    let fixture = Fixture::new(false);
    fs::remove_dir_all(fixture.source_dcim()).unwrap();
    fs::write(fixture.source_dcim(), b"not a directory").unwrap();

    let err = workflow_with(&RecordingEjector::default())
        .run(&fixture.context)
        .unwrap_err();

    assert!(matches!(err.root(), OrganizeError::NotADirectory(_)));
}

#[test]
fn test_staging_creation_failure_names_stage() {
    let fixture = Fixture::new(false);
    // 暫存路徑的上層是檔案，無法建立資料夾
    let pictures = fixture.context.tmp_dir.parent().unwrap().to_path_buf();
    fs::write(&pictures, b"blocker").unwrap();

    let err = workflow_with(&RecordingEjector::default())
        .run(&fixture.context)
        .unwrap_err();

    assert!(matches!(
        err,
        OrganizeError::Stage {
            stage: WorkflowStage::CreateStaging,
            ..
        }
    ));
    assert_eq!(entry_count(&fixture.source_dcim()), 4);
}

#[test]
fn test_destination_copy_failure_keeps_source() {
    let fixture = Fixture::new(false);
    // 目的地已有同名的檔案，無法建立 2025-12-31 資料夾
    fs::write(
        fixture.context.destination_path.join("2025-12-31"),
        b"blocker",
    )
    .unwrap();
    let ejector = RecordingEjector::default();

    let err = workflow_with(&ejector).run(&fixture.context).unwrap_err();

    assert!(matches!(
        err,
        OrganizeError::Stage {
            stage: WorkflowStage::CopyToDestination,
            ..
        }
    ));
    assert_eq!(entry_count(&fixture.source_dcim()), 4);
    assert_eq!(
        fs::read(fixture.source_dcim().join("02512310").join("DSC00001.ARW")).unwrap(),
        b"raw-1"
    );
    assert!(ejector.calls.borrow().is_empty());
}

#[test]
fn test_backup_cleanup_eject_failure_is_only_a_warning() {
    let fixture = Fixture::new(false);
    let ejector = RecordingEjector {
        fail: true,
        ..RecordingEjector::default()
    };

    let report = workflow_with(&ejector)
        .run_backup_cleanup(&fixture.context)
        .unwrap();

    let warning = report.eject_warning.unwrap();
    assert!(warning.contains("failed to eject volume 1-2"));
    assert_eq!(entry_count(&fixture.context.backup_dcim()), 0);
    assert_eq!(*ejector.calls.borrow(), vec!["1-2".to_string()]);
}

#[test]
fn test_eject_failure_is_only_a_warning() {
    let fixture = Fixture::new(false);
    let ejector = RecordingEjector {
        fail: true,
        ..RecordingEjector::default()
    };

    let report = workflow_with(&ejector).run(&fixture.context).unwrap();

    let warning = report.eject_warning.unwrap();
    assert!(warning.contains("failed to eject volume 1-1"));
    assert!(fixture.context.destination_path.join("2025-12-31").is_dir());
}

#[test]
fn test_backup_cleanup() {
    let fixture = Fixture::new(false);
    let ejector = RecordingEjector::default();

    let report = workflow_with(&ejector)
        .run_backup_cleanup(&fixture.context)
        .unwrap();

    let backup_dcim = fixture.context.backup_dcim();
    assert!(backup_dcim.is_dir());
    assert_eq!(entry_count(&backup_dcim), 0);
    assert!(report.eject_warning.is_none());
    assert_eq!(*ejector.calls.borrow(), vec!["1-2".to_string()]);
    // 主要 SD 卡不受影響
    assert_eq!(entry_count(&fixture.source_dcim()), 4);
}

#[test]
fn test_backup_cleanup_dry_run() {
    let fixture = Fixture::new(true);
    let ejector = RecordingEjector::default();

    workflow_with(&ejector)
        .run_backup_cleanup(&fixture.context)
        .unwrap();

    assert_eq!(entry_count(&fixture.context.backup_dcim()), 1);
    assert!(ejector.calls.borrow().is_empty());
}

#[test]
fn test_backup_cleanup_missing_volume() {
    let fixture = Fixture::new(false);
    fs::remove_dir_all(&fixture.context.backup_path).unwrap();

    let err = workflow_with(&RecordingEjector::default())
        .run_backup_cleanup(&fixture.context)
        .unwrap_err();

    assert!(matches!(err, OrganizeError::BackupMissing(_)));
}

#[test]
fn test_backup_cleanup_missing_dcim() {
    let fixture = Fixture::new(false);
    fs::remove_dir_all(fixture.context.backup_dcim()).unwrap();

    let err = workflow_with(&RecordingEjector::default())
        .run_backup_cleanup(&fixture.context)
        .unwrap_err();

    assert!(matches!(err, OrganizeError::BackupSourceMissing(_)));
}
