//! # ユースケース層
//!
//! 科学者・惑星・ミッションのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入出力の変換のみを行い、ロジックはユースケースに集約
//! - **事前検証**: 書き込み前に一意性と参照先の存在を確認し、違反はまとめて返す。
//!   DB 制約は検証をすり抜けた場合の最終防衛線として残す

pub(crate) mod helpers;

pub mod mission;
pub mod planet;
pub mod scientist;

pub use mission::{CreateMissionInput, MissionUseCaseImpl, MissionWithRelations};
pub use planet::PlanetUseCaseImpl;
pub use scientist::{
    CreateScientistInput,
    ScientistUseCaseImpl,
    ScientistWithMissions,
    UpdateScientistInput,
};
