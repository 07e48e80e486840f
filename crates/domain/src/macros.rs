/// DB 採番の整数 ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i64` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `from_i64()`: DB やリクエストの整数値から復元
/// - `as_i64()`: 内部の整数値を取得
///
/// ID は永続化時に DB が採番するため、`new()` は生成しない。
///
/// # 使用例
///
/// ```rust
/// use cosmic_domain::scientist::ScientistId;
///
/// let id = ScientistId::from_i64(7);
/// assert_eq!(id.as_i64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
macro_rules! define_integer_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        #[serde(transparent)]
        $vis struct $Name(i64);

        impl $Name {
            /// 整数値から ID を作成する
            pub fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// 内部の整数値を取得する
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }
    };
}

/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: trim + 空チェック + 最大長チェック
/// - `required()`: 値の欠落（`None`）も違反として扱う `new()`
/// - `as_str()`: 文字列参照
/// - `Display` impl
///
/// 検証失敗は [`Violation`](crate::Violation) として返し、
/// 呼び出し側で [`ValidationErrors`](crate::ValidationErrors) に蓄積する。
///
/// # 引数
///
/// - `field`: 違反に記録するリクエスト上のキー名（例: `"name"`）
/// - `label`: エラーメッセージに使うラベル（例: `"科学者名"`）
/// - `max_length`: 最大文字数（`chars().count()` でカウント）
///
/// # 使用例
///
/// ```rust
/// use cosmic_domain::value_objects::ScientistName;
///
/// let name = ScientistName::new("  Marie Curie ").unwrap();
/// assert_eq!(name.as_str(), "Marie Curie");
///
/// let violation = ScientistName::required(None).unwrap_err();
/// assert_eq!(violation.field(), "name");
/// ```
macro_rules! define_validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            field: $field:expr,
            label: $label:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            /// 違反に記録するフィールド名
            pub const FIELD: &'static str = $field;

            pub fn new(value: impl Into<String>) -> Result<Self, $crate::Violation> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::Violation::new(
                        $field,
                        format!("{}は必須です", $label),
                    ));
                }

                if value.chars().count() > $max_length {
                    return Err($crate::Violation::new(
                        $field,
                        format!("{}は {} 文字以内である必要があります", $label, $max_length),
                    ));
                }

                Ok(Self(value))
            }

            /// 必須値として検証する
            ///
            /// `None`（キーの欠落や `null`）は必須違反になる。
            pub fn required(value: Option<String>) -> Result<Self, $crate::Violation> {
                match value {
                    Some(value) => Self::new(value),
                    None => Err($crate::Violation::new(
                        $field,
                        format!("{}は必須です", $label),
                    )),
                }
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
