//! Survey pipeline for categorical favorite-show data
//!
//! This crate turns a decrypted survey payload into per-segment probability
//! tables and serves them to a presentation layer.
//!
//! # Overview
//!
//! Data flows one way:
//!
//! ```text
//! SurveyData -> JoinedObservation -> FrequencyTable (per Segment) -> DistributionTable
//!                                                                      |
//!                                          SurveyContext::select(choice)
//! ```
//!
//! 1. **Load** ([`record::SurveyData`]): students and offered shows from JSON
//! 2. **Join** ([`join`]): resolve each student's answer to a show name
//! 3. **Count** ([`counter::FrequencyCounter`]): frequency table per segment
//! 4. **Distribute** ([`statprob_stats::distribution::DistributionTable`]): PDF/CDF/percentage
//! 5. **Select** ([`context::SurveyContext`]): look up the table of a segment
//!
//! # Examples
//!
//! ```
//! use statprob_survey::{
//!     context::SurveyContext, counter::ZeroCategoryPolicy, record::SurveyData,
//! };
//!
//! let data = SurveyData::from_json(
//!     r#"{
//!         "students": [
//!             { "id": "01", "name": "A", "gender": "female", "most_like_show": 6 },
//!             { "id": "02", "name": "B", "gender": "male", "most_like_show": 6 },
//!             { "id": "03", "name": "C", "gender": "male", "most_like_show": 1 },
//!             { "id": "04", "name": "D", "gender": "female", "most_like_show": 7 }
//!         ],
//!         "shows": [
//!             { "id": 1, "name": "Olahraga" },
//!             { "id": 6, "name": "Film Drama" },
//!             { "id": 7, "name": "Sinetron" }
//!         ]
//!     }"#,
//! )?;
//!
//! let context = SurveyContext::build(&data, ZeroCategoryPolicy::Omit)?;
//! let view = context.select("Keseluruhan")?;
//!
//! assert_eq!(view.total, 4);
//! for row in view.table {
//!     println!("{:<12} {:>3} {:>16} {:>26} {:>6.2}", row.label, row.frequency, row.pdf_trace, row.cdf_trace, row.percentage);
//! }
//! assert_eq!(view.table.rows()[0].cdf_trace, "0.5000 = 0.5000");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod context;
pub mod counter;
pub mod error;
pub mod join;
pub mod record;
pub mod segment;
