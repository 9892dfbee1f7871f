use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 新規プロジェクトに設定するプレースホルダ名
pub const PLACEHOLDER_NAME: &str = "my-javascript-project";

/// 新規プロジェクトの初期バージョン
pub const INITIAL_VERSION: &str = "0.1.0";

/// package.jsonの既知フィールド名
pub mod fields {
    pub const NAME: &str = "name";
    pub const VERSION: &str = "version";
    pub const REPOSITORY: &str = "repository";
    pub const BUGS: &str = "bugs";
    pub const HOMEPAGE: &str = "homepage";
    pub const BIN: &str = "bin";
    pub const SCRIPTS: &str = "scripts";
    pub const DEV_DEPENDENCIES: &str = "devDependencies";
    pub const LINT_STAGED: &str = "lint-staged";
}

/// プロジェクトのパッケージ記述子（package.json）
///
/// キーの出現順を保ったJSONオブジェクトとして保持し、既知のフィールドには
/// 型付きのアクセサを用意する。未知のフィールドは位置も含めてそのまま残る。
/// 値が`null`のフィールドは存在しないものとして扱う。
///
/// 変更系のメソッドは`self`を消費して新しい値を返す。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// フィールドを取得（`null`は未設定扱い）
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(fields::NAME).and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.get(fields::VERSION).and_then(Value::as_str)
    }

    pub fn homepage(&self) -> Option<&Value> {
        self.get(fields::HOMEPAGE)
    }

    pub fn bin(&self) -> Option<&Value> {
        self.get(fields::BIN)
    }

    /// `scripts`テーブル（オブジェクトでない場合はNone）
    pub fn scripts(&self) -> Option<&Map<String, Value>> {
        self.get(fields::SCRIPTS).and_then(Value::as_object)
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts()
            .and_then(|scripts| scripts.get(name))
            .and_then(Value::as_str)
    }

    /// `devDependencies`テーブル（オブジェクトでない場合はNone）
    pub fn dev_dependencies(&self) -> Option<&Map<String, Value>> {
        self.get(fields::DEV_DEPENDENCIES).and_then(Value::as_object)
    }

    /// フィールドを設定（既存キーは位置を保ったまま値だけ置き換える）
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// フィールドを削除し、削除した値を返す（未設定なら何もしない）
    pub fn without_field(mut self, key: &str) -> (Self, Option<Value>) {
        if !self.contains(key) {
            return (self, None);
        }
        let removed = self.fields.shift_remove(key);
        (self, removed)
    }

    /// `scripts`から1件削除
    pub fn without_script(self, name: &str) -> (Self, Option<Value>) {
        self.without_nested(fields::SCRIPTS, name)
    }

    /// `devDependencies`から1件削除
    pub fn without_dev_dependency(self, name: &str) -> (Self, Option<Value>) {
        self.without_nested(fields::DEV_DEPENDENCIES, name)
    }

    /// 条件を満たさないスクリプトを削除し、削除したキーを元の順で返す
    pub fn retain_scripts<F>(mut self, mut keep: F) -> (Self, Vec<String>)
    where
        F: FnMut(&str) -> bool,
    {
        let Some(scripts) = self
            .fields
            .get_mut(fields::SCRIPTS)
            .and_then(Value::as_object_mut)
        else {
            return (self, Vec::new());
        };

        let removed: Vec<String> = scripts
            .keys()
            .filter(|key| !keep(key.as_str()))
            .cloned()
            .collect();
        for key in &removed {
            scripts.shift_remove(key);
        }
        (self, removed)
    }

    fn without_nested(mut self, table: &str, key: &str) -> (Self, Option<Value>) {
        let removed = self
            .fields
            .get_mut(table)
            .and_then(Value::as_object_mut)
            .filter(|entries| entries.get(key).is_some_and(|value| !value.is_null()))
            .and_then(|entries| entries.shift_remove(key));
        (self, removed)
    }
}

impl From<Map<String, Value>> for PackageManifest {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}
