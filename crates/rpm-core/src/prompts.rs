//! Prompt templates for the two document stages and the toolbox.
//!
//! Prompts are pure functions of the request. Stage B never sees stage A's
//! output, which is what allows both calls to be dispatched concurrently.

use crate::models::{LessonPlanRequest, Stage, ToolboxCategory};

/// Heading that opens each session sub-block in the learning experience.
pub const SESSION_HEADING: &str = "### PERTEMUAN KE-";

/// Prefix of each worksheet entry in the appendix.
pub const WORKSHEET_LABEL: &str = "LKPD ";

const NO_PREAMBLE: &str = "PENTING: JANGAN BERIKAN KATA PENGANTAR (seperti \"Berikut adalah...\" \
atau \"Tentu...\"). LANGSUNG MULAI DENGAN OUTPUT MARKDOWN.";

const PRINCIPLE_CHOICE: &str =
    "*Prinsip: (Pilih yang relevan: Berkesadaran / Bermakna / Menggembirakan)*";

/// Builds the prompt for the given stage.
pub fn stage_prompt(stage: Stage, request: &LessonPlanRequest) -> String {
    match stage {
        Stage::A => document_opening_prompt(request),
        Stage::B => document_closing_prompt(request),
    }
}

/// Prompt A: title through the per-session learning experience.
pub fn document_opening_prompt(request: &LessonPlanRequest) -> String {
    let sessions = request.session_count;
    format!(
        r#"Bertindaklah sebagai Ahli Kurikulum Merdeka di Indonesia. Susun bagian awal draft Rencana Pembelajaran Mendalam (RPM).

{NO_PREAMBLE}

DATA INPUT:
Sekolah: {school}
Kepala Sekolah: {principal} (NIP: {principal_id})
Guru: {teacher} (NIP: {teacher_id})
Tempat/Tanggal: {place}, {date}
Mata Pelajaran: {subject}
Kelas/Fase: {class_phase}
Semester: {semester}
Tahun Pelajaran: {academic_year}
Alokasi Waktu: {time_allocation}
Jumlah Pertemuan: {sessions}
Capaian Pembelajaran: {outcome}
Tujuan Pembelajaran: {objective}

STRUKTUR YANG HARUS DIIKUTI (Markdown):
# RENCANA PEMBELAJARAN MENDALAM (RPM)

## A. IDENTITAS MODUL
(Tabel Markdown: Sekolah, Penyusun, Mata Pelajaran, Kelas/Fase, Semester, Tahun Pelajaran, Topik, Alokasi Waktu Total).

## B. IDENTIFIKASI
1. **Identifikasi Peserta Didik**: analisis profil belajar murid.
2. **Materi Pelajaran**: konsep esensial.
3. **Dimensi Profil Lulusan (DPL)**: pilih 3 dimensi yang paling relevan.

## C. DESAIN PEMBELAJARAN
(Tabel 2 kolom: CP, TP, Strategi Pedagogis, Kemitraan, Lingkungan Belajar, Alat Digital).

## D. PENGALAMAN BELAJAR
Tulis TEPAT {sessions} blok pertemuan, tidak lebih dan tidak kurang, dari PERTEMUAN KE-1 sampai PERTEMUAN KE-{sessions}. Setiap blok mengikuti struktur berikut:

{SESSION_HEADING}[X]
**1. Kegiatan Awal**
- Langkah konkret (Apersepsi, Motivasi, Tujuan).
- {PRINCIPLE_CHOICE}.

**2. Kegiatan Inti (Deep Learning)**
- **Memahami (Eksplorasi)**: aktivitas konkret dan produk murid. {PRINCIPLE_CHOICE}.
- **Mengaplikasikan (Aksi Nyata)**: tugas kontekstual dan produk murid. {PRINCIPLE_CHOICE}.
- **Merefleksi (Makna)**: pertanyaan refleksi. {PRINCIPLE_CHOICE}.

**3. Kegiatan Penutup**
- Kesimpulan, umpan balik, doa.
- {PRINCIPLE_CHOICE}.

CATATAN: JANGAN tuliskan kolom tanda tangan di bagian ini."#,
        school = request.school,
        principal = request.principal,
        principal_id = request.principal_id,
        teacher = request.teacher,
        teacher_id = request.teacher_id,
        place = request.place,
        date = request.date,
        subject = request.subject,
        class_phase = request.class_phase,
        semester = request.semester,
        academic_year = request.academic_year,
        time_allocation = request.time_allocation,
        outcome = request.learning_outcome,
        objective = request.learning_objective,
    )
}

/// Prompt B: assessment, sign-off table and appendices.
pub fn document_closing_prompt(request: &LessonPlanRequest) -> String {
    let sessions = request.session_count;
    format!(
        r#"Lanjutkan draft Rencana Pembelajaran Mendalam (RPM) dengan bagian penutup.

{NO_PREAMBLE}

Mata Pelajaran: {subject}
Capaian Pembelajaran: {outcome}
Tujuan Pembelajaran: {objective}
Jumlah Pertemuan: {sessions}

STRUKTUR:
## E. ASESMEN
(Rincian Asesmen Awal, Formatif, dan Sumatif). JANGAN lampirkan kolom tanda tangan di bagian ini.

## F. PENGESAHAN
Salin tabel HTML berikut apa adanya:
{signature}

## G. LAMPIRAN
1. **LKPD (Lembar Kerja Peserta Didik)**
   Buat LKPD yang berbeda untuk SETIAP pertemuan. Karena ada {sessions} pertemuan, buat tepat {sessions} LKPD dengan judul "{WORKSHEET_LABEL}1" sampai "{WORKSHEET_LABEL}{sessions}".
2. **MATERI AJAR**
   (Ringkasan esensial).
3. **RUBRIK ASESMEN**
   (Tabel Markdown: Aspek, Kriteria, Skor)."#,
        subject = request.subject,
        outcome = request.learning_outcome,
        objective = request.learning_objective,
        signature = signature_table(request),
    )
}

/// The literal sign-off table embedded in the document.
///
/// `border="0"` marks it as the borderless variant for word-processor export.
pub fn signature_table(request: &LessonPlanRequest) -> String {
    format!(
        r#"<table border="0" width="100%" style="margin-top: 50px; border: none; font-family: 'Times New Roman';">
  <tr>
    <td width="50%" align="center" style="border: none; vertical-align: top;">
      Mengetahui,<br>Kepala Sekolah<br><br><br><br><br>
      <strong>{principal}</strong><br>NIP. {principal_id}
    </td>
    <td width="50%" align="center" style="border: none; vertical-align: top;">
      {place}, {date}<br>Guru Kelas<br><br><br><br><br>
      <strong>{teacher}</strong><br>NIP. {teacher_id}
    </td>
  </tr>
</table>"#,
        principal = request.principal,
        principal_id = request.principal_id,
        place = request.place,
        date = request.date,
        teacher = request.teacher,
        teacher_id = request.teacher_id,
    )
}

/// Prompt for one toolbox category.
pub fn toolbox_prompt(category: ToolboxCategory, request: &LessonPlanRequest) -> String {
    format!(
        "Berikan ide kreatif untuk {label} pada mata pelajaran {subject} kelas {class_phase} \
         dengan tujuan: {objective}. Tampilkan dalam format Markdown. \
         JANGAN berikan kata pembuka.",
        label = category.prompt_label(),
        subject = request.subject,
        class_phase = request.class_phase,
        objective = request.learning_objective,
    )
}
