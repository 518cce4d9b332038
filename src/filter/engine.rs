use crate::filter::criteria::{ReportCriteria, Selection, SortKey, UserCriteria};
use crate::filter::style::{status_to_marker_style, MarkerStyle};
use crate::model::{Report, ReportStatus, User};

/// A report placed on the map together with its marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker<'a> {
    pub report: &'a Report,
    pub style: MarkerStyle,
}

pub fn filter_reports<'a, I>(reports: I, criteria: &ReportCriteria) -> Vec<&'a Report>
where
    I: IntoIterator<Item = &'a Report>,
{
    reports
        .into_iter()
        .filter(|report| {
            matches_search(&criteria.search_term, [&report.title, &report.description])
        })
        .filter(|report| criteria.ward.matches_opt(report.ward.as_ref()))
        .filter(|report| criteria.status.matches(&report.status))
        .collect::<Vec<_>>()
}

/// Stable sort: reports with equal keys keep their input order.
pub fn sort_reports<'a, I>(reports: I, key: SortKey) -> Vec<&'a Report>
where
    I: IntoIterator<Item = &'a Report>,
{
    let mut sorted = reports.into_iter().collect::<Vec<_>>();
    match key {
        SortKey::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Status => sorted.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
        SortKey::Ward => sorted.sort_by(|a, b| a.ward_name().cmp(b.ward_name())),
    }
    sorted
}

pub fn filter_users<'a, I>(users: I, criteria: &UserCriteria) -> Vec<&'a User>
where
    I: IntoIterator<Item = &'a User>,
{
    users
        .into_iter()
        .filter(|user| matches_search(&criteria.search_term, [&user.name, &user.email]))
        .filter(|user| criteria.role.matches(&user.role))
        .collect::<Vec<_>>()
}

pub fn filter_reports_for_map<'a, I>(
    reports: I,
    ward: &Selection<String>,
    status: &Selection<ReportStatus>,
) -> Vec<MapMarker<'a>>
where
    I: IntoIterator<Item = &'a Report>,
{
    reports
        .into_iter()
        .filter(|report| ward.matches_opt(report.ward.as_ref()))
        .filter(|report| status.matches(&report.status))
        .map(|report| MapMarker {
            report,
            style: status_to_marker_style(report.status),
        })
        .collect::<Vec<_>>()
}

fn matches_search<const N: usize>(term: &str, fields: [&String; N]) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{mock_reports, mock_users, ts, Location, UserRole};
    use itertools::Itertools;

    fn report(id: &str, status: ReportStatus, ward: &str, created: &str) -> Report {
        Report::new(
            id,
            format!("Report {id}"),
            "Waste issue",
            Location::new(28.6, 77.2, "Somewhere"),
            status,
            "Citizen Sharma",
            ts(created),
        )
        .with_ward(ward)
    }

    fn seven_reports() -> Vec<Report> {
        let statuses = [
            ReportStatus::Pending,
            ReportStatus::Assigned,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
            ReportStatus::Closed,
            ReportStatus::Pending,
            ReportStatus::Assigned,
        ];
        let wards = ["Central", "North", "South", "East", "West", "Central", "North"];
        statuses
            .iter()
            .zip(wards)
            .enumerate()
            .map(|(index, (status, ward))| {
                let mut r = report(
                    &index.to_string(),
                    *status,
                    ward,
                    &format!("2023-06-0{}T10:00:00", index + 1),
                );
                if status.is_finished() {
                    r = r.resolved(ts(&format!("2023-06-0{}T18:00:00", index + 1)));
                }
                r
            })
            .collect()
    }

    fn ids(reports: &[&Report]) -> Vec<String> {
        reports.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn unconstrained_filter_is_identity() {
        let reports = seven_reports();
        let filtered = filter_reports(&reports, &ReportCriteria::new());
        assert_eq!(filtered, reports.iter().collect::<Vec<_>>());
    }

    #[test]
    fn status_filter_keeps_pending_positions() {
        let reports = seven_reports();
        let criteria = ReportCriteria::new().status(ReportStatus::Pending);
        let filtered = filter_reports(&reports, &criteria);
        assert_eq!(ids(&filtered), vec!["0", "5"]);
    }

    #[test]
    fn status_filter_partitions_collection() {
        let reports = mock_reports();
        for status in ReportStatus::ALL {
            let criteria = ReportCriteria::new().status(status);
            let kept = filter_reports(&reports, &criteria);
            assert!(kept.iter().all(|r| r.status == status));
            let excluded = reports
                .iter()
                .filter(|r| !kept.iter().any(|k| k.id == r.id))
                .collect::<Vec<_>>();
            assert!(excluded.iter().all(|r| r.status != status));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let reports = mock_reports();
        let criteria = ReportCriteria::new().search("garbage").ward("North Ward");
        let once = filter_reports(&reports, &criteria);
        let twice = filter_reports(once.clone(), &criteria);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec!["7"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let reports = mock_reports();
        let by_title = filter_reports(&reports, &ReportCriteria::new().search("GARBAGE"));
        assert_eq!(ids(&by_title), vec!["1", "7"]);

        let by_description = filter_reports(&reports, &ReportCriteria::new().search("River"));
        assert_eq!(ids(&by_description), vec!["3"]);
    }

    #[test]
    fn ward_filter_is_case_sensitive() {
        let reports = mock_reports();
        assert!(filter_reports(&reports, &ReportCriteria::new().ward("central ward")).is_empty());
        let central = filter_reports(&reports, &ReportCriteria::new().ward("Central Ward"));
        assert_eq!(ids(&central), vec!["1", "6"]);
    }

    #[test]
    fn report_without_ward_never_matches_specific_ward() {
        let mut reports = seven_reports();
        reports[0].ward = None;
        let criteria = ReportCriteria::new().ward("Central");
        assert_eq!(ids(&filter_reports(&reports, &criteria)), vec!["5"]);
        assert_eq!(filter_reports(&reports, &ReportCriteria::new()).len(), 7);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let criteria = ReportCriteria::new().search("x").status(ReportStatus::Closed);
        assert!(filter_reports(&Vec::<Report>::new(), &criteria).is_empty());
        assert!(filter_users(&Vec::<User>::new(), &UserCriteria::new()).is_empty());
        assert!(sort_reports(&Vec::<Report>::new(), SortKey::Ward).is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let reports = seven_reports();
        let before = reports.clone();
        let _ = sort_reports(&reports, SortKey::Ward);
        let _ = filter_reports(&reports, &ReportCriteria::new().status(ReportStatus::Closed));
        assert_eq!(reports, before);
    }

    #[test]
    fn ward_sort_is_lexicographic() {
        let reports = seven_reports();
        let sorted = sort_reports(&reports, SortKey::Ward);
        let wards = sorted.iter().map(|r| r.ward_name()).collect::<Vec<_>>();
        assert_eq!(
            wards,
            vec!["Central", "Central", "East", "North", "North", "South", "West"]
        );
        // ties keep input order
        assert_eq!(ids(&sorted), vec!["0", "5", "3", "1", "6", "2", "4"]);
    }

    #[test]
    fn status_sort_compares_wire_names() {
        let reports = seven_reports();
        let sorted = sort_reports(&reports, SortKey::Status);
        let statuses = sorted.iter().map(|r| r.status.as_str()).collect::<Vec<_>>();
        assert_eq!(
            statuses,
            vec!["assigned", "assigned", "closed", "in_progress", "pending", "pending", "resolved"]
        );
        assert_eq!(ids(&sorted), vec!["1", "6", "4", "2", "0", "5", "3"]);
    }

    #[test]
    fn newest_reversed_equals_oldest() {
        let reports = seven_reports();
        let mut newest = sort_reports(&reports, SortKey::Newest);
        newest.reverse();
        assert_eq!(newest, sort_reports(&reports, SortKey::Oldest));
        assert_eq!(ids(&sort_reports(&reports, SortKey::Newest))[0], "6");
    }

    #[test]
    fn date_sort_is_stable_on_equal_timestamps() {
        let reports = vec![
            report("a", ReportStatus::Pending, "X", "2023-06-01T10:00:00"),
            report("b", ReportStatus::Pending, "X", "2023-06-01T10:00:00"),
            report("c", ReportStatus::Pending, "X", "2023-06-02T10:00:00"),
        ];
        assert_eq!(ids(&sort_reports(&reports, SortKey::Newest)), vec!["c", "a", "b"]);
        assert_eq!(ids(&sort_reports(&reports, SortKey::Oldest)), vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_sort_key_behaves_like_newest() {
        let reports = mock_reports();
        assert_eq!(
            sort_reports(&reports, SortKey::from("popularity")),
            sort_reports(&reports, SortKey::Newest)
        );
    }

    #[test]
    fn users_filter_by_search_and_role() {
        let users = mock_users();
        let names = |users: Vec<&User>| users.iter().map(|u| u.name.clone()).collect_vec();

        assert_eq!(names(filter_users(&users, &UserCriteria::new())).len(), 4);
        assert_eq!(
            names(filter_users(&users, &UserCriteria::new().search("ULB.GOV"))),
            vec!["Admin User", "Officer Kumar"]
        );
        assert_eq!(
            names(filter_users(&users, &UserCriteria::new().search("singh"))),
            vec!["Champion Singh"]
        );
        assert_eq!(
            names(filter_users(
                &users,
                &UserCriteria::new().search("ulb").role(UserRole::Officer)
            )),
            vec!["Officer Kumar"]
        );
        assert!(filter_users(&users, &UserCriteria::new().search("nobody")).is_empty());
    }

    #[test]
    fn map_markers_follow_filters_and_status() {
        let reports = mock_reports();
        let markers = filter_reports_for_map(
            &reports,
            &Selection::Only("North Ward".to_string()),
            &Selection::All,
        );
        assert_eq!(markers.len(), 2);
        assert!(markers.iter().all(|m| m.style == MarkerStyle::Orange));

        let all = filter_reports_for_map(&reports, &Selection::All, &Selection::All);
        assert_eq!(all.len(), reports.len());
        assert_eq!(all[3].style, MarkerStyle::Green);

        let closed = filter_reports_for_map(
            &reports,
            &Selection::All,
            &Selection::Only(ReportStatus::Closed),
        );
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].report.id, "5");
        assert_eq!(closed[0].style, MarkerStyle::Blue);
    }
}
