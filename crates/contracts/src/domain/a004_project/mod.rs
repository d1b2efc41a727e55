pub mod aggregate;
pub mod resources;
pub mod seed;

pub use aggregate::{Project, ProjectDto, ProjectPatch, ProjectStatus, Schedule};
pub use resources::{
    Material, MaterialDto, MaterialPatch, MaterialStatus, ProjectItem, ProjectItemDto,
    ProjectItemPatch, Staff, StaffDto, StaffPatch, StaffStatus,
};
