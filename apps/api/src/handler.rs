//! # HTTP ハンドラ
//!
//! リクエストを解釈してユースケースを呼び出し、ビュー型でレスポンスを返す。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 成功時 |
//! |---------|------|--------|
//! | GET | `/` | 200（空ボディ） |
//! | GET | `/scientists` | 200 `[ScientistSummary]` |
//! | GET | `/scientists/{id}` | 200 `ScientistDetail` |
//! | PATCH | `/scientists/{id}` | 202 `ScientistSummary` |
//! | DELETE | `/scientists/{id}` | 204（空ボディ） |
//! | POST | `/scientists` | 201 `ScientistDetail` |
//! | GET | `/planets` | 200 `[PlanetSummary]` |
//! | POST | `/missions` | 201 `MissionDetail` |
//! | GET | `/health` | 200 |
//! | GET | `/health/ready` | 200 / 503 |

pub mod health;
pub mod home;
pub mod mission;
pub mod planet;
pub mod scientist;
pub mod view;

pub use health::{ReadinessState, health_check, readiness_check};
pub use home::home;
pub use mission::{MissionState, create_mission};
pub use planet::{PlanetState, list_planets};
pub use scientist::{
    ScientistState,
    create_scientist,
    delete_scientist,
    get_scientist,
    list_scientists,
    update_scientist,
};
