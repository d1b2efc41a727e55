use super::{
    Material, MaterialStatus, Project, ProjectItem, ProjectStatus, Staff, StaffStatus,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            name: "Chung cư Sunrise Tower".into(),
            description: "Xây dựng tòa chung cư 25 tầng tại Quận 7".into(),
            status: ProjectStatus::InProgress,
            start_date: date(2025, 1, 15),
            end_date: date(2026, 12, 31),
            progress: 45,
            assigned_staff: vec!["1".into(), "2".into(), "3".into()],
        },
        Project {
            id: "2".into(),
            name: "Nhà xưởng Bình Dương".into(),
            description: "Nhà xưởng khung thép tiền chế 5.000 m²".into(),
            status: ProjectStatus::Planning,
            start_date: date(2026, 3, 1),
            end_date: date(2026, 10, 30),
            progress: 0,
            assigned_staff: vec!["4".into()],
        },
        Project {
            id: "3".into(),
            name: "Trường tiểu học Hòa Bình".into(),
            description: "Cải tạo khu lớp học và sân trường".into(),
            status: ProjectStatus::Completed,
            start_date: date(2024, 6, 1),
            end_date: date(2024, 12, 20),
            progress: 100,
            assigned_staff: vec!["5".into()],
        },
        Project {
            id: "4".into(),
            name: "Biệt thự Thảo Điền".into(),
            description: "Hoàn thiện nội thất biệt thự 3 tầng".into(),
            status: ProjectStatus::OnHold,
            start_date: date(2024, 9, 1),
            end_date: date(2025, 6, 30),
            progress: 60,
            assigned_staff: Vec::new(),
        },
    ]
}

pub fn project_items() -> Vec<ProjectItem> {
    let item = |id: &str, project_id: &str, name: &str, status, start, end, progress| ProjectItem {
        id: id.into(),
        project_id: project_id.into(),
        name: name.into(),
        description: String::new(),
        status,
        start_date: start,
        end_date: end,
        progress,
    };
    vec![
        item("1", "1", "Thi công móng", ProjectStatus::Completed, date(2025, 1, 15), date(2025, 4, 30), 100),
        item("2", "1", "Kết cấu thân", ProjectStatus::InProgress, date(2025, 5, 1), date(2026, 3, 31), 40),
        item("3", "1", "Hoàn thiện", ProjectStatus::Planning, date(2026, 4, 1), date(2026, 12, 31), 0),
        item("4", "2", "San lấp mặt bằng", ProjectStatus::Planning, date(2026, 3, 1), date(2026, 4, 15), 0),
    ]
}

pub fn materials() -> Vec<Material> {
    let material = |id: &str, project_id: &str, name: &str, quantity, unit: &str, status| Material {
        id: id.into(),
        project_id: project_id.into(),
        name: name.into(),
        quantity,
        unit: unit.into(),
        status,
    };
    vec![
        material("1", "1", "Xi măng Portland", 1200.0, "Bao", MaterialStatus::Available),
        material("2", "1", "Thép D10", 35.0, "Tấn", MaterialStatus::Ordered),
        material("3", "1", "Cát xây dựng", 0.0, "m³", MaterialStatus::OutOfStock),
        material("4", "2", "Thép hình I200", 80.0, "Tấn", MaterialStatus::Ordered),
    ]
}

pub fn staff() -> Vec<Staff> {
    let member = |id: &str, project_id: &str, name: &str, role: &str, status| Staff {
        id: id.into(),
        project_id: project_id.into(),
        name: name.into(),
        role: role.into(),
        status,
    };
    vec![
        member("1", "1", "Nguyễn Văn An", "Chỉ huy trưởng", StaffStatus::Active),
        member("2", "1", "Trần Thị Bình", "Kỹ sư kết cấu", StaffStatus::Active),
        member("3", "1", "Lê Văn Cường", "Giám sát an toàn", StaffStatus::Inactive),
        member("4", "2", "Phạm Minh Đức", "Kỹ sư dự toán", StaffStatus::Active),
        member("5", "3", "Hoàng Thu Hà", "Kiến trúc sư", StaffStatus::Active),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_reference_known_projects() {
        let ids: Vec<String> = projects().into_iter().map(|p| p.id).collect();
        assert!(project_items().iter().all(|i| ids.contains(&i.project_id)));
        assert!(materials().iter().all(|m| ids.contains(&m.project_id)));
        assert!(staff().iter().all(|s| ids.contains(&s.project_id)));
    }

    #[test]
    fn test_seed_dates_are_ordered() {
        assert!(projects().iter().all(|p| p.start_date <= p.end_date));
        assert!(project_items().iter().all(|i| i.start_date <= i.end_date));
    }
}
