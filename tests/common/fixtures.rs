//! テストフィクスチャ管理

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

/// 一時ディレクトリ上の入力ファイル群
pub struct Workspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::Builder::new().prefix("csvstats_test").tempdir().unwrap() }
    }

    /// テキストファイルを作成
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        self.bytes(name, content.as_bytes())
    }

    /// バイナリ内容のファイルを作成
    pub fn bytes(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// 対象バイナリのコマンドを生成 (ログは既定レベルに固定)
pub fn csvstats() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_csvstats"));
    cmd.env_remove("RUST_LOG");
    cmd
}
