//! # 科学者
//!
//! ミッションを所有する科学者エンティティ。
//!
//! ## 設計方針
//!
//! - **所有関係**: 科学者は 0 件以上のミッションを所有し、削除時はミッションも削除される
//! - **更新の許可リスト**: 変更可能なのは `name` と `field_of_study` のみ。
//!   [`ScientistUpdate`] がリクエストのキーを検査し、未知のキーや `id` を拒否する
//! - **不変更新**: `with_*` メソッドは新しいインスタンスを返す
//!
//! ## 使用例
//!
//! ```rust
//! use cosmic_domain::scientist::{Scientist, ScientistId, ScientistUpdate};
//! use cosmic_domain::value_objects::{FieldOfStudy, ScientistName};
//! use serde_json::json;
//!
//! let scientist = Scientist::from_db(
//!     ScientistId::from_i64(1),
//!     ScientistName::new("Ada Lovelace").unwrap(),
//!     FieldOfStudy::new("Computing").unwrap(),
//! );
//!
//! let body = json!({ "field_of_study": "Physics" });
//! let update = ScientistUpdate::from_fields(body.as_object().unwrap()).unwrap();
//! let updated = scientist.apply(update);
//!
//! assert_eq!(updated.name().as_str(), "Ada Lovelace");
//! assert_eq!(updated.field_of_study().as_str(), "Physics");
//! ```

use serde_json::{Map, Value};

use crate::{
    DomainError,
    ValidationErrors,
    Violation,
    value_objects::{FieldOfStudy, ScientistName},
};

define_integer_id! {
    /// 科学者の一意識別子
    pub struct ScientistId;
}

/// 科学者エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scientist {
    id:             ScientistId,
    name:           ScientistName,
    field_of_study: FieldOfStudy,
}

impl Scientist {
    /// 既存のデータから科学者を復元する（データベースから取得時）
    pub fn from_db(id: ScientistId, name: ScientistName, field_of_study: FieldOfStudy) -> Self {
        Self {
            id,
            name,
            field_of_study,
        }
    }

    pub fn id(&self) -> ScientistId {
        self.id
    }

    pub fn name(&self) -> &ScientistName {
        &self.name
    }

    pub fn field_of_study(&self) -> &FieldOfStudy {
        &self.field_of_study
    }

    /// 名前を更新する
    pub fn with_name(self, name: ScientistName) -> Self {
        Self { name, ..self }
    }

    /// 研究分野を更新する
    pub fn with_field_of_study(self, field_of_study: FieldOfStudy) -> Self {
        Self {
            field_of_study,
            ..self
        }
    }

    /// 更新リクエストを適用する
    ///
    /// 指定されたフィールドのみを上書きし、それ以外は変更しない。
    pub fn apply(self, update: ScientistUpdate) -> Self {
        let scientist = match update.name {
            Some(name) => self.with_name(name),
            None => self,
        };
        match update.field_of_study {
            Some(field_of_study) => scientist.with_field_of_study(field_of_study),
            None => scientist,
        }
    }
}

/// 新規作成する科学者（ID 採番前）
///
/// 永続化時に DB が ID を採番し、[`Scientist`] になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScientist {
    name:           ScientistName,
    field_of_study: FieldOfStudy,
}

impl NewScientist {
    /// リクエストの値を検証して作成する
    ///
    /// `name`, `field_of_study` はともに必須。違反はまとめて返す。
    pub fn new(name: Option<String>, field_of_study: Option<String>) -> Result<Self, DomainError> {
        let mut errors = ValidationErrors::new();
        let name = errors.check(ScientistName::required(name));
        let field_of_study = errors.check(FieldOfStudy::required(field_of_study));

        match (name, field_of_study) {
            (Some(name), Some(field_of_study)) => Ok(Self {
                name,
                field_of_study,
            }),
            _ => Err(DomainError::Validation(errors)),
        }
    }

    pub fn name(&self) -> &ScientistName {
        &self.name
    }

    pub fn field_of_study(&self) -> &FieldOfStudy {
        &self.field_of_study
    }

    /// 採番された ID を付与して [`Scientist`] にする
    pub fn into_scientist(self, id: ScientistId) -> Scientist {
        Scientist::from_db(id, self.name, self.field_of_study)
    }
}

/// 科学者の部分更新リクエスト
///
/// PATCH のボディに含まれるキーだけを保持する。
/// 変更可能なフィールドは許可リストで固定し、それ以外のキーは違反として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScientistUpdate {
    name:           Option<ScientistName>,
    field_of_study: Option<FieldOfStudy>,
}

impl ScientistUpdate {
    /// JSON オブジェクトのキーから更新リクエストを組み立てる
    ///
    /// # 違反になるケース
    ///
    /// - `id` などの変更不可フィールド、未知のキー
    /// - 値が文字列でない（`null` を含む）
    /// - 値が値オブジェクトの検証に失敗する
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, DomainError> {
        let mut errors = ValidationErrors::new();
        let mut update = Self::default();

        for (key, value) in fields {
            match key.as_str() {
                ScientistName::FIELD => {
                    update.name = errors
                        .check(string_value(key, value).and_then(ScientistName::new));
                }
                FieldOfStudy::FIELD => {
                    update.field_of_study = errors
                        .check(string_value(key, value).and_then(FieldOfStudy::new));
                }
                "id" => errors.add(Violation::new(key.as_str(), "変更できないフィールドです")),
                _ => errors.add(Violation::new(key.as_str(), "不明なフィールドです")),
            }
        }

        errors.finish()?;
        Ok(update)
    }

    pub fn name(&self) -> Option<&ScientistName> {
        self.name.as_ref()
    }

    pub fn field_of_study(&self) -> Option<&FieldOfStudy> {
        self.field_of_study.as_ref()
    }

    /// 変更対象のフィールドがひとつもないか
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.field_of_study.is_none()
    }
}

/// JSON 値を文字列として取り出す
fn string_value<'a>(key: &str, value: &'a Value) -> Result<&'a str, Violation> {
    value
        .as_str()
        .ok_or_else(|| Violation::new(key, "文字列である必要があります"))
}
