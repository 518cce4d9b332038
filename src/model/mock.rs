use crate::model::timestamp::parse_timestamp;
use crate::model::{Location, Report, ReportStatus, User, UserRole, Ward};
use chrono::{DateTime, Utc};

const IMAGE_BASE: &str = "https://source.unsplash.com/random/800x600/?";

fn at(raw: &str) -> DateTime<Utc> {
    parse_timestamp(raw).unwrap_or_default()
}

pub fn mock_users() -> Vec<User> {
    vec![
        User::new("1", "Admin User", "admin@ulb.gov.in", UserRole::Admin, at("2023-01-01"))
            .with_phone("9876543210")
            .with_address("ULB Office, Main Street")
            .with_avatar("https://i.pravatar.cc/150?img=1"),
        User::new("2", "Officer Kumar", "officer@ulb.gov.in", UserRole::Officer, at("2023-01-15"))
            .with_phone("9876543211")
            .with_ward("Ward 1")
            .with_avatar("https://i.pravatar.cc/150?img=2"),
        User::new(
            "3",
            "Champion Singh",
            "champion@example.com",
            UserRole::Champion,
            at("2023-02-01"),
        )
        .with_phone("9876543212")
        .with_ward("Ward 2")
        .with_avatar("https://i.pravatar.cc/150?img=3"),
        User::new("4", "Citizen Sharma", "citizen@example.com", UserRole::Citizen, at("2023-02-15"))
            .with_phone("9876543213")
            .with_ward("Ward 3")
            .with_avatar("https://i.pravatar.cc/150?img=4"),
    ]
}

pub fn mock_wards() -> Vec<Ward> {
    vec![
        Ward::new("1", "Central Ward", 1, "5.2 sq km", 25000),
        Ward::new("2", "North Ward", 2, "4.8 sq km", 22000),
        Ward::new("3", "South Ward", 3, "6.1 sq km", 28000),
        Ward::new("4", "East Ward", 4, "5.5 sq km", 26000),
        Ward::new("5", "West Ward", 5, "4.9 sq km", 23000),
    ]
}

pub fn mock_reports() -> Vec<Report> {
    let citizen = "Citizen Sharma";
    let champion = "Champion Singh";
    let officer = "Officer Kumar";
    vec![
        Report::new(
            "1",
            "Garbage overflow",
            "Garbage bin overflowing near market area",
            Location::new(28.6139, 77.2090, "Market Road, Central Ward"),
            ReportStatus::Pending,
            citizen,
            at("2023-06-01T10:30:00"),
        )
        .with_ward("Central Ward")
        .with_image(format!("{IMAGE_BASE}garbage")),
        Report::new(
            "2",
            "Blocked drain",
            "Drain blocked causing water logging",
            Location::new(28.6219, 77.2190, "Main Street, North Ward"),
            ReportStatus::Assigned,
            citizen,
            at("2023-06-02T09:15:00"),
        )
        .with_ward("North Ward")
        .with_image(format!("{IMAGE_BASE}drain"))
        .assigned(officer, at("2023-06-02T14:20:00")),
        Report::new(
            "3",
            "Waste dumping",
            "Illegal waste dumping near river",
            Location::new(28.6129, 77.2295, "River Road, South Ward"),
            ReportStatus::InProgress,
            champion,
            at("2023-06-03T11:45:00"),
        )
        .with_ward("South Ward")
        .with_image(format!("{IMAGE_BASE}waste"))
        .assigned(officer, at("2023-06-03T16:30:00")),
        Report::new(
            "4",
            "Broken bin",
            "Waste bin damaged and needs replacement",
            Location::new(28.6359, 77.2100, "Park Avenue, East Ward"),
            ReportStatus::Resolved,
            citizen,
            at("2023-06-04T08:20:00"),
        )
        .with_ward("East Ward")
        .with_image(format!("{IMAGE_BASE}bin"))
        .assigned(officer, at("2023-06-04T08:20:00"))
        .resolved(at("2023-06-05T13:10:00")),
        Report::new(
            "5",
            "Sewage leakage",
            "Sewage leaking on main road",
            Location::new(28.6109, 77.2380, "Colony Road, West Ward"),
            ReportStatus::Closed,
            champion,
            at("2023-06-05T10:00:00"),
        )
        .with_ward("West Ward")
        .with_image(format!("{IMAGE_BASE}sewage"))
        .assigned(officer, at("2023-06-05T10:00:00"))
        .resolved(at("2023-06-07T09:30:00")),
        Report::new(
            "6",
            "Waste collection missed",
            "Regular waste collection not done for 3 days",
            Location::new(28.6229, 77.2190, "Residential Area, Central Ward"),
            ReportStatus::Pending,
            citizen,
            at("2023-06-06T14:20:00"),
        )
        .with_ward("Central Ward")
        .with_image(format!("{IMAGE_BASE}waste-collection")),
        Report::new(
            "7",
            "Garbage burning",
            "Someone burning garbage in open area",
            Location::new(28.6149, 77.2110, "Open Ground, North Ward"),
            ReportStatus::Assigned,
            champion,
            at("2023-06-07T11:30:00"),
        )
        .with_ward("North Ward")
        .with_image(format!("{IMAGE_BASE}burning"))
        .assigned(officer, at("2023-06-07T16:45:00")),
    ]
}
