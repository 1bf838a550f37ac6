//! The lesson-plan request: everything the form collects.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RpmError};

/// Subjects offered by the form.
pub const SUBJECT_OPTIONS: &[&str] = &[
    "Pendidikan Agama Islam",
    "Pendidikan Pancasila",
    "Bahasa Indonesia",
    "Matematika",
    "IPAS",
    "Seni Rupa",
    "Seni Tari",
    "Seni Musik",
    "PJOK",
    "Bahasa Inggris",
    "Bahasa Madura",
];

/// Class/phase labels offered by the form.
pub const CLASS_OPTIONS: &[&str] = &["I/A", "II/A", "III/B", "IV/B", "V/C", "VI/C"];

/// Semesters offered by the form.
pub const SEMESTER_OPTIONS: &[&str] = &["Ganjil", "Genap"];

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Number of teaching sessions, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionCount(u32);

impl SessionCount {
    /// The smallest valid session count.
    pub const ONE: SessionCount = SessionCount(1);

    /// Creates a session count, rejecting zero.
    pub fn new(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(RpmError::invalid_input("session_count")
                .with_reason("a lesson plan needs at least one session"));
        }
        Ok(Self(count))
    }

    /// Parses user input the way the form does: anything that is not a
    /// positive integer becomes one session.
    ///
    /// ```rust
    /// use rpm_core::models::SessionCount;
    ///
    /// assert_eq!(SessionCount::parse_lenient("3").get(), 3);
    /// assert_eq!(SessionCount::parse_lenient("tiga").get(), 1);
    /// assert_eq!(SessionCount::parse_lenient("0").get(), 1);
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let digits: String = input
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        Self::from_lenient_u64(digits.parse().unwrap_or(0))
    }

    fn from_lenient_u64(value: u64) -> Self {
        match u32::try_from(value) {
            Ok(0) | Err(_) => Self::ONE,
            Ok(n) => Self(n),
        }
    }

    /// The count as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for SessionCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for SessionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SessionCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for SessionCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Float(f64),
            Text(String),
            Null,
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::from_lenient_u64(u64::try_from(n).unwrap_or(0)),
            // saturating cast: NaN and negatives become 0, fractions truncate
            Raw::Float(f) => Self::from_lenient_u64(f as u64),
            Raw::Text(s) => Self::parse_lenient(&s),
            Raw::Null => Self::ONE,
        })
    }
}

/// Structured lesson-plan attributes entered by the user.
///
/// Every field except [`session_count`](Self::session_count) is an opaque
/// string interpolated into prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonPlanRequest {
    pub school: String,
    pub principal: String,
    pub principal_id: String,
    pub teacher: String,
    pub teacher_id: String,
    pub place: String,
    pub date: String,
    pub subject: String,
    pub class_phase: String,
    pub semester: String,
    pub academic_year: String,
    pub time_allocation: String,
    pub session_count: SessionCount,
    /// Achieved competency statement (capaian pembelajaran)
    pub learning_outcome: String,
    /// Learning objective statement (tujuan pembelajaran)
    pub learning_objective: String,
}

impl Default for LessonPlanRequest {
    fn default() -> Self {
        Self {
            school: "SD Negeri 1 Contoh".to_string(),
            principal: "Drs. Budi Santoso, M.Pd.".to_string(),
            principal_id: "19700101 199501 1 001".to_string(),
            teacher: "Hairur Rahman, S.Pd.".to_string(),
            teacher_id: "19900505 201501 1 002".to_string(),
            place: "Sumenep".to_string(),
            date: format_date_id(jiff::Zoned::now().date()),
            subject: "Bahasa Indonesia".to_string(),
            class_phase: "IV/B".to_string(),
            semester: "Ganjil".to_string(),
            academic_year: "2023/2024".to_string(),
            time_allocation: "2 JP (2 x 35 Menit)".to_string(),
            session_count: SessionCount::ONE,
            learning_outcome: "Peserta didik mampu memahami ide pokok (gagasan) suatu pesan \
                lisan, informasi dari media audio, teks aural (teks yang dibacakan dan/atau \
                didengar), dan instruksi lisan yang berkaitan dengan tujuan berkomunikasi."
                .to_string(),
            learning_objective: "Peserta didik mampu menceritakan kembali isi teks narasi \
                dengan bahasa sendiri secara runtut."
                .to_string(),
        }
    }
}

impl LessonPlanRequest {
    /// Parses a request from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Updates one field from raw user input.
    ///
    /// The session count is coerced with [`SessionCount::parse_lenient`];
    /// every other value is stored verbatim.
    pub fn set(&mut self, field: FormField, value: &str) {
        let value = value.to_string();
        match field {
            FormField::School => self.school = value,
            FormField::Principal => self.principal = value,
            FormField::PrincipalId => self.principal_id = value,
            FormField::Teacher => self.teacher = value,
            FormField::TeacherId => self.teacher_id = value,
            FormField::Place => self.place = value,
            FormField::Date => self.date = value,
            FormField::Subject => self.subject = value,
            FormField::ClassPhase => self.class_phase = value,
            FormField::Semester => self.semester = value,
            FormField::AcademicYear => self.academic_year = value,
            FormField::TimeAllocation => self.time_allocation = value,
            FormField::SessionCount => self.session_count = SessionCount::parse_lenient(&value),
            FormField::LearningOutcome => self.learning_outcome = value,
            FormField::LearningObjective => self.learning_objective = value,
        }
    }

    /// Applies a `key=value` assignment, where `key` is any name accepted by
    /// [`FormField::from_str`].
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            RpmError::invalid_input(assignment).with_reason("expected KEY=VALUE")
        })?;
        let field = key.trim().parse::<FormField>()?;
        self.set(field, value);
        Ok(())
    }
}

/// Formats a date the way Indonesian forms print it, e.g. `5 Agustus 2025`.
pub fn format_date_id(date: Date) -> String {
    let month = MONTHS_ID[usize::from(date.month().unsigned_abs()) - 1];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Names of the individually editable request fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    School,
    Principal,
    PrincipalId,
    Teacher,
    TeacherId,
    Place,
    Date,
    Subject,
    ClassPhase,
    Semester,
    AcademicYear,
    TimeAllocation,
    SessionCount,
    LearningOutcome,
    LearningObjective,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 15] = [
        FormField::School,
        FormField::Principal,
        FormField::PrincipalId,
        FormField::Teacher,
        FormField::TeacherId,
        FormField::Place,
        FormField::Date,
        FormField::Subject,
        FormField::ClassPhase,
        FormField::Semester,
        FormField::AcademicYear,
        FormField::TimeAllocation,
        FormField::SessionCount,
        FormField::LearningOutcome,
        FormField::LearningObjective,
    ];

    /// Canonical key, matching the JSON field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::School => "school",
            FormField::Principal => "principal",
            FormField::PrincipalId => "principal_id",
            FormField::Teacher => "teacher",
            FormField::TeacherId => "teacher_id",
            FormField::Place => "place",
            FormField::Date => "date",
            FormField::Subject => "subject",
            FormField::ClassPhase => "class_phase",
            FormField::Semester => "semester",
            FormField::AcademicYear => "academic_year",
            FormField::TimeAllocation => "time_allocation",
            FormField::SessionCount => "session_count",
            FormField::LearningOutcome => "learning_outcome",
            FormField::LearningObjective => "learning_objective",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = RpmError;

    /// Accepts canonical keys, dashed variants and the Indonesian form names.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace('-', "_");
        let field = match key.as_str() {
            "school" | "sekolah" => FormField::School,
            "principal" | "kepsek" => FormField::Principal,
            "principal_id" | "nipkepsek" | "nip_kepsek" => FormField::PrincipalId,
            "teacher" | "guru" => FormField::Teacher,
            "teacher_id" | "nipguru" | "nip_guru" => FormField::TeacherId,
            "place" | "tempat" => FormField::Place,
            "date" | "tanggal" => FormField::Date,
            "subject" | "mapel" => FormField::Subject,
            "class_phase" | "class" | "kelas" => FormField::ClassPhase,
            "semester" => FormField::Semester,
            "academic_year" | "year" | "tahun" => FormField::AcademicYear,
            "time_allocation" | "alokasiwaktu" | "alokasi_waktu" => FormField::TimeAllocation,
            "session_count" | "sessions" | "jumlahpertemuan" | "jumlah_pertemuan" => {
                FormField::SessionCount
            }
            "learning_outcome" | "outcome" | "capaianpembelajaran" | "cp" => {
                FormField::LearningOutcome
            }
            "learning_objective" | "objective" | "tujuanpembelajaran" | "tp" => {
                FormField::LearningObjective
            }
            _ => {
                return Err(RpmError::invalid_input(s).with_reason("unknown form field"));
            }
        };
        Ok(field)
    }
}
