//! User-facing text in the supported languages.

use serde::{Deserialize, Serialize};

use crate::Classification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::English, Self::Vietnamese];

    /// Config/file code (`"en"`, `"vi"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Vietnamese => "vi",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "vi" | "vietnamese" | "tiếng việt" => Some(Self::Vietnamese),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::English => Self::Vietnamese,
            Self::Vietnamese => Self::English,
        }
    }

    #[must_use]
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Self::English => &ENGLISH,
            Self::Vietnamese => &VIETNAMESE,
        }
    }
}

/// Every string the UI shows to the user, for one language.
#[derive(Debug)]
pub struct Catalog {
    pub title: &'static str,
    pub tab_quadratic: &'static str,
    pub tab_linear: &'static str,
    pub equation_form: &'static str,
    /// Indexed by `Coefficient::index()`.
    pub field_labels: [&'static str; 3],
    pub field_placeholders: [&'static str; 3],
    pub solve: &'static str,
    pub clear: &'static str,
    pub result_heading: &'static str,
    pub discriminant_label: &'static str,
    pub conclusion_label: &'static str,
    pub roots_label: &'static str,
    pub no_real_root: &'static str,
    pub repeated_root: &'static str,
    pub two_distinct_roots: &'static str,
    pub invalid_input: &'static str,
    pub degenerate_a: &'static str,
    pub linear_heading: &'static str,
    pub linear_body: [&'static str; 2],
    pub linear_open: &'static str,
    pub linear_footer: &'static str,
    pub opened: &'static str,
    pub open_failed: &'static str,
    pub language_switched: &'static str,
}

impl Catalog {
    #[must_use]
    pub const fn conclusion(&self, classification: Classification) -> &'static str {
        match classification {
            Classification::NoRealRoot => self.no_real_root,
            Classification::RepeatedRoot => self.repeated_root,
            Classification::TwoDistinctRoots => self.two_distinct_roots,
        }
    }
}

static ENGLISH: Catalog = Catalog {
    title: "Equation Solver",
    tab_quadratic: "Quadratic Equation",
    tab_linear: "Linear System",
    equation_form: "The equation has the form:",
    field_labels: ["Coefficient a:", "Coefficient b:", "Coefficient c:"],
    field_placeholders: [
        "Enter coefficient a",
        "Enter coefficient b",
        "Enter coefficient c",
    ],
    solve: "Solve",
    clear: "Clear",
    result_heading: "Result:",
    discriminant_label: "Delta (Δ):",
    conclusion_label: "Conclusion:",
    roots_label: "Roots:",
    no_real_root: "The equation has no real roots (delta < 0)",
    repeated_root: "The equation has a repeated root",
    two_distinct_roots: "The equation has 2 distinct roots",
    invalid_input: "Please enter valid coefficients!",
    degenerate_a: "Coefficient a must be non-zero for a quadratic equation!",
    linear_heading: "Linear System Solver",
    linear_body: [
        "Solving systems of linear equations runs as a separate, independent service.",
        "Press Enter to open the linear system solver in your browser.",
    ],
    linear_open: "Open Linear System Solver",
    linear_footer: "The service runs at its own address",
    opened: "Opened",
    open_failed: "Could not open",
    language_switched: "Language: English",
};

static VIETNAMESE: Catalog = Catalog {
    title: "Giải Phương Trình",
    tab_quadratic: "Giải Phương Trình Bậc 2",
    tab_linear: "Giải Hệ Phương Trình",
    equation_form: "Phương trình có dạng:",
    field_labels: ["Hệ số a:", "Hệ số b:", "Hệ số c:"],
    field_placeholders: ["Nhập hệ số a", "Nhập hệ số b", "Nhập hệ số c"],
    solve: "Giải Phương Trình",
    clear: "Xóa Dữ Liệu",
    result_heading: "Kết Quả:",
    discriminant_label: "Delta (Δ):",
    conclusion_label: "Kết luận:",
    roots_label: "Nghiệm:",
    no_real_root: "Phương trình vô nghiệm (delta < 0)",
    repeated_root: "Phương trình có nghiệm kép",
    two_distinct_roots: "Phương trình có 2 nghiệm phân biệt",
    invalid_input: "Vui lòng nhập các hệ số hợp lệ!",
    degenerate_a: "Hệ số a phải khác 0 để có phương trình bậc 2!",
    linear_heading: "Giải Hệ Phương Trình Tuyến Tính",
    linear_body: [
        "Chức năng giải hệ phương trình đã được tách riêng thành một dịch vụ độc lập.",
        "Nhấn Enter để mở ứng dụng giải hệ phương trình trong trình duyệt.",
    ],
    linear_open: "Mở Ứng Dụng Giải Hệ Phương Trình",
    linear_footer: "Dịch vụ đang chạy tại một cổng riêng biệt",
    opened: "Đã mở",
    open_failed: "Không thể mở",
    language_switched: "Ngôn ngữ: Tiếng Việt",
};
