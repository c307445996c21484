//! Results page extraction
//!
//! Each results row is a table row carrying most fields as `data-*`
//! attributes, plus two nested cells for the profile link and the finish
//! time. Rows whose name is the "Unknown" sentinel are anonymized by the
//! source and expose nothing beyond name and position.

use crate::dataset::{ResultRecord, Runner, RunnerDetails, UNKNOWN_NAME};
use crate::extract::{selector, ExtractError};
use scraper::{ElementRef, Html};

const ROW_SELECTOR: &str = "tr.Results-table-row";
const PROFILE_SELECTOR: &str = "td.Results-table-td--name a";
const TIME_SELECTOR: &str = "td.Results-table-td--time div";

/// Extracts every results row of one event's results page, in source order
///
/// Source order is finishing order, so the returned records are in ascending
/// position. Every record is stamped with `event_no`. A row missing any of
/// its required sub-fields fails the whole call; there is no per-row partial
/// success.
///
/// # Arguments
///
/// * `doc` - The parsed results page
/// * `event_no` - Sequence number of the event instance the page belongs to
///
/// # Returns
///
/// * `Ok(Vec<ResultRecord>)` - One record per results row
/// * `Err(ExtractError)` - A row was missing a required element or attribute
pub fn extract_results(doc: &Html, event_no: u32) -> Result<Vec<ResultRecord>, ExtractError> {
    let row_sel = selector(ROW_SELECTOR)?;
    let profile_sel = selector(PROFILE_SELECTOR)?;
    let time_sel = selector(TIME_SELECTOR)?;

    let mut records = Vec::new();

    for row in doc.select(&row_sel) {
        let name = row_attr(row, "data-name")?;
        let position = row_attr(row, "data-position")?;
        let position = position
            .parse::<u32>()
            .map_err(|_| ExtractError::BadNumber {
                field: "data-position",
                value: position.to_string(),
            })?;

        let runner = if name == UNKNOWN_NAME {
            Runner::Unknown
        } else {
            let profile = row
                .select(&profile_sel)
                .next()
                .ok_or(ExtractError::MissingElement {
                    selector: PROFILE_SELECTOR,
                })?;
            let href = profile
                .value()
                .attr("href")
                .ok_or(ExtractError::MissingAttribute { attr: "href" })?;
            // Profile id is the final path segment of the link target
            let parkrun_id = href.rsplit('/').next().unwrap_or(href);

            let time = row
                .select(&time_sel)
                .next()
                .ok_or(ExtractError::MissingElement {
                    selector: TIME_SELECTOR,
                })?
                .text()
                .collect::<String>()
                .trim()
                .to_string();

            Runner::Identified(RunnerDetails {
                name: name.to_string(),
                parkrun_id: parkrun_id.to_string(),
                time,
                achievement: row_attr(row, "data-achievement")?.to_string(),
                age_grade: row_attr(row, "data-agegrade")?.to_string(),
                age_group: row_attr(row, "data-agegroup")?.to_string(),
                club: row_attr(row, "data-club")?.to_string(),
                gender: row_attr(row, "data-gender")?.to_string(),
                runs: row_attr(row, "data-runs")?.to_string(),
            })
        };

        records.push(ResultRecord {
            event_no,
            position,
            runner,
        });
    }

    Ok(records)
}

/// Reads a required row-level attribute
fn row_attr<'a>(row: ElementRef<'a>, attr: &'static str) -> Result<&'a str, ExtractError> {
    row.value()
        .attr(attr)
        .ok_or(ExtractError::MissingAttribute { attr })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identified_row(position: u32, name: &str, club: &str) -> String {
        format!(
            r#"<tr class="Results-table-row" data-name="{name}" data-position="{position}"
                   data-achievement="First Timer!" data-agegrade="72.31 %" data-agegroup="SW25-29"
                   data-club="{club}" data-gender="Female" data-runs="42">
                 <td class="Results-table-td Results-table-td--name">
                   <a href="https://www.parkrun.org.uk/parkrunner/1234567">{name}</a>
                 </td>
                 <td class="Results-table-td Results-table-td--time"><div class="compact">19:04</div></td>
               </tr>"#
        )
    }

    fn unknown_row(position: u32) -> String {
        format!(r#"<tr class="Results-table-row" data-name="Unknown" data-position="{position}"></tr>"#)
    }

    fn results_page(rows: &[String]) -> Html {
        Html::parse_document(&format!(
            "<html><body><table class=\"Results-table\"><tbody>{}</tbody></table></body></html>",
            rows.join("\n")
        ))
    }

    #[test]
    fn test_identified_row_has_full_detail_set() {
        let doc = results_page(&[identified_row(1, "Alice JONES", "Ambleside AC")]);
        let records = extract_results(&doc, 99).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.event_no, 99);
        assert_eq!(record.position, 1);
        match &record.runner {
            Runner::Identified(details) => {
                assert_eq!(details.name, "Alice JONES");
                assert_eq!(details.parkrun_id, "1234567");
                assert_eq!(details.time, "19:04");
                assert_eq!(details.achievement, "First Timer!");
                assert_eq!(details.age_grade, "72.31 %");
                assert_eq!(details.age_group, "SW25-29");
                assert_eq!(details.club, "Ambleside AC");
                assert_eq!(details.gender, "Female");
                assert_eq!(details.runs, "42");
            }
            Runner::Unknown => panic!("expected an identified runner"),
        }
    }

    #[test]
    fn test_unknown_row_has_only_name_and_position() {
        let doc = results_page(&[unknown_row(2)]);
        let records = extract_results(&doc, 7).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position, 2);
        assert_eq!(records[0].name(), "Unknown");
        assert!(matches!(records[0].runner, Runner::Unknown));
    }

    #[test]
    fn test_rows_preserve_source_order() {
        let doc = results_page(&[
            identified_row(1, "Alice JONES", ""),
            unknown_row(2),
            identified_row(3, "Bob HOPE", ""),
        ]);
        let records = extract_results(&doc, 42).unwrap();

        let positions: Vec<u32> = records.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert!(records.iter().all(|r| r.event_no == 42));
    }

    #[test]
    fn test_page_with_no_rows_yields_no_records() {
        let doc = results_page(&[]);
        let records = extract_results(&doc, 1).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_time_cell_fails_the_whole_extraction() {
        let broken = r#"<tr class="Results-table-row" data-name="Carol DAY" data-position="1"
                            data-achievement="" data-agegrade="50 %" data-agegroup="SW30-34"
                            data-club="" data-gender="Female" data-runs="3">
                          <td class="Results-table-td Results-table-td--name">
                            <a href="https://www.parkrun.org.uk/parkrunner/7654321">Carol DAY</a>
                          </td>
                        </tr>"#;
        let doc = results_page(&[broken.to_string(), unknown_row(2)]);

        assert!(matches!(
            extract_results(&doc, 1),
            Err(ExtractError::MissingElement {
                selector: TIME_SELECTOR
            })
        ));
    }

    #[test]
    fn test_missing_profile_link_fails_the_whole_extraction() {
        let broken = r#"<tr class="Results-table-row" data-name="Carol DAY" data-position="1"
                            data-achievement="" data-agegrade="50 %" data-agegroup="SW30-34"
                            data-club="" data-gender="Female" data-runs="3">
                          <td class="Results-table-td Results-table-td--time"><div>25:00</div></td>
                        </tr>"#;
        let doc = results_page(&[broken.to_string()]);

        assert!(matches!(
            extract_results(&doc, 1),
            Err(ExtractError::MissingElement {
                selector: PROFILE_SELECTOR
            })
        ));
    }

    #[test]
    fn test_missing_position_attribute_is_an_error() {
        let broken = r#"<tr class="Results-table-row" data-name="Unknown"></tr>"#;
        let doc = results_page(&[broken.to_string()]);

        assert!(matches!(
            extract_results(&doc, 1),
            Err(ExtractError::MissingAttribute {
                attr: "data-position"
            })
        ));
    }

    #[test]
    fn test_non_numeric_position_is_an_error() {
        let broken =
            r#"<tr class="Results-table-row" data-name="Unknown" data-position="first"></tr>"#;
        let doc = results_page(&[broken.to_string()]);

        assert!(matches!(
            extract_results(&doc, 1),
            Err(ExtractError::BadNumber {
                field: "data-position",
                ..
            })
        ));
    }
}
