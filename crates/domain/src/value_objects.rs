//! # 共通値オブジェクト
//!
//! エンティティの属性を表す検証付き文字列型を定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 生成時に検証し、不正な値の存在を型レベルで排除
//! - **不変性**: 一度作成したら変更不可
//!
//! ## 含まれる型
//!
//! | 型 | フィールド | 用途 |
//! |---|-----------|------|
//! | [`ScientistName`] | `name` | 科学者名（一意） |
//! | [`FieldOfStudy`] | `field_of_study` | 研究分野 |
//! | [`PlanetName`] | `name` | 惑星名（一意） |
//! | [`DistanceFromEarth`] | `distance_from_earth` | 地球からの距離（記述形式） |
//! | [`StarName`] | `nearest_star` | 最寄りの恒星名 |
//! | [`MissionName`] | `name` | ミッション名 |

// =========================================================================
// Scientist
// =========================================================================

define_validated_string! {
    /// 科学者名（値オブジェクト）
    ///
    /// 全科学者の中で一意であること（重複チェックはユースケース層と DB 制約で行う）。
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 100 文字
    pub struct ScientistName {
        field: "name",
        label: "科学者名",
        max_length: 100,
    }
}

define_validated_string! {
    /// 研究分野（値オブジェクト）
    pub struct FieldOfStudy {
        field: "field_of_study",
        label: "研究分野",
        max_length: 100,
    }
}

// =========================================================================
// Planet
// =========================================================================

define_validated_string! {
    /// 惑星名（値オブジェクト）
    ///
    /// 全惑星の中で一意であること。
    pub struct PlanetName {
        field: "name",
        label: "惑星名",
        max_length: 100,
    }
}

define_validated_string! {
    /// 地球からの距離（値オブジェクト）
    ///
    /// `"4.24 light-years"` のような記述形式の文字列。単位の解釈はしない。
    pub struct DistanceFromEarth {
        field: "distance_from_earth",
        label: "地球からの距離",
        max_length: 100,
    }
}

define_validated_string! {
    /// 最寄りの恒星名（値オブジェクト）
    pub struct StarName {
        field: "nearest_star",
        label: "最寄りの恒星",
        max_length: 100,
    }
}

// =========================================================================
// Mission
// =========================================================================

define_validated_string! {
    /// ミッション名（値オブジェクト）
    ///
    /// 一意性は要求しない。
    pub struct MissionName {
        field: "name",
        label: "ミッション名",
        max_length: 100,
    }
}

// =========================================================================
// テスト
// =========================================================================
