pub mod resume;

pub use resume::{
    Award, Certification, Contact, ContactLink, Education, Experience, Project, ResumeModel,
    SkillRow, SkillSet, MAX_SKILL_ROWS,
};
