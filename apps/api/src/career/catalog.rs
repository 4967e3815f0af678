//! The static career catalog. Compiled in, read-only for the process lifetime.

use serde::Serialize;

use crate::career::roadmap::RoadmapKey;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerProfile {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub salary_range: &'static str,
    pub growth: &'static str,
    pub required_skills: &'static [&'static str],
    pub education: &'static str,
    pub work_environment: &'static str,
    pub key_tasks: &'static [&'static str],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub related_careers: &'static [&'static str],
    #[serde(rename = "roadmapKey")]
    pub roadmap: RoadmapKey,
}

/// Looks up a catalog entry by its id.
pub fn find_career(id: &str) -> Option<&'static CareerProfile> {
    CATALOG.iter().find(|c| c.id == id)
}

pub static CATALOG: &[CareerProfile] = &[
    CareerProfile {
        id: "software-engineer",
        title: "Software Engineer",
        description: "Design, develop, and maintain software applications and systems using various programming languages and technologies.",
        salary_range: "$70,000 - $150,000",
        growth: "Very High (22% growth)",
        required_skills: &["Programming", "Problem Solving", "System Design", "Testing", "Version Control"],
        education: "Bachelor's in Computer Science or related field",
        work_environment: "Office/Remote",
        key_tasks: &["Write and test code", "Debug applications", "Collaborate with team", "Design software architecture"],
        pros: &["High demand", "Good compensation", "Remote work opportunities", "Continuous learning"],
        cons: &["Long hours during deadlines", "Rapidly changing technology", "Can be stressful"],
        related_careers: &["Data Scientist", "DevOps Engineer", "Product Manager"],
        roadmap: RoadmapKey::SoftwareEngineer,
    },
    CareerProfile {
        id: "data-scientist",
        title: "Data Scientist",
        description: "Analyze complex data sets to extract insights and build predictive models for business decision-making.",
        salary_range: "$80,000 - $160,000",
        growth: "Very High (31% growth)",
        required_skills: &["Statistics", "Programming", "Machine Learning", "Data Visualization", "SQL"],
        education: "Bachelor's in Statistics, Math, or Computer Science",
        work_environment: "Office/Remote",
        key_tasks: &["Analyze data patterns", "Build ML models", "Create visualizations", "Present findings"],
        pros: &["High growth field", "Excellent pay", "Varied projects", "Impact on business decisions"],
        cons: &["Requires continuous learning", "Complex problems", "Data quality issues"],
        related_careers: &["Machine Learning Engineer", "Business Analyst", "Research Scientist"],
        roadmap: RoadmapKey::DataScientist,
    },
    CareerProfile {
        id: "ux-designer",
        title: "UX Designer",
        description: "Create user-centered designs for digital products, focusing on user experience and interface design.",
        salary_range: "$60,000 - $120,000",
        growth: "High (13% growth)",
        required_skills: &["Design Thinking", "Prototyping", "User Research", "Wireframing", "Usability Testing"],
        education: "Bachelor's in Design, Psychology, or related field",
        work_environment: "Office/Remote",
        key_tasks: &["Conduct user research", "Create wireframes", "Design prototypes", "Test usability"],
        pros: &["Creative work", "User impact", "Growing field", "Collaborative environment"],
        cons: &["Subjective feedback", "Tight deadlines", "Balancing user needs with business goals"],
        related_careers: &["Product Designer", "UI Designer", "Front-end Developer"],
        roadmap: RoadmapKey::UxDesigner,
    },
    CareerProfile {
        id: "digital-marketer",
        title: "Digital Marketing Specialist",
        description: "Develop and execute digital marketing strategies across various online channels to drive business growth.",
        salary_range: "$45,000 - $95,000",
        growth: "High (10% growth)",
        required_skills: &["SEO", "Social Media", "Analytics", "Content Creation", "PPC Advertising"],
        education: "Bachelor's in Marketing or related field",
        work_environment: "Office/Remote",
        key_tasks: &["Manage social media", "Create content", "Analyze metrics", "Run ad campaigns"],
        pros: &["Creative and analytical", "Measurable results", "Diverse channels", "Remote opportunities"],
        cons: &["Algorithm changes", "Constant learning", "Pressure for results"],
        related_careers: &["Content Manager", "Social Media Manager", "Marketing Manager"],
        roadmap: RoadmapKey::Generic,
    },
    CareerProfile {
        id: "project-manager",
        title: "Project Manager",
        description: "Lead cross-functional teams to deliver projects on time, within scope, and budget using various methodologies.",
        salary_range: "$65,000 - $130,000",
        growth: "High (11% growth)",
        required_skills: &["Leadership", "Communication", "Planning", "Risk Management", "Agile/Scrum"],
        education: "Bachelor's degree, PMP certification preferred",
        work_environment: "Office/Hybrid",
        key_tasks: &["Plan projects", "Coordinate teams", "Manage timelines", "Communicate with stakeholders"],
        pros: &["Leadership opportunities", "Diverse projects", "Good compensation", "Transferable skills"],
        cons: &["High responsibility", "Stressful deadlines", "Challenging stakeholders"],
        related_careers: &["Product Manager", "Program Manager", "Business Analyst"],
        roadmap: RoadmapKey::Generic,
    },
    CareerProfile {
        id: "financial-analyst",
        title: "Financial Analyst",
        description: "Analyze financial data and market trends to provide insights for investment decisions and business planning.",
        salary_range: "$55,000 - $110,000",
        growth: "Medium (6% growth)",
        required_skills: &["Financial Modeling", "Excel", "Statistics", "Research", "Critical Thinking"],
        education: "Bachelor's in Finance, Economics, or related field",
        work_environment: "Office",
        key_tasks: &["Build financial models", "Analyze market trends", "Create reports", "Present findings"],
        pros: &["Analytical work", "Good compensation", "Career progression", "Stable industry"],
        cons: &["High pressure", "Long hours", "Detailed work", "Market volatility stress"],
        related_careers: &["Investment Banker", "Risk Analyst", "Portfolio Manager"],
        roadmap: RoadmapKey::Generic,
    },
    CareerProfile {
        id: "nurse",
        title: "Registered Nurse",
        description: "Provide patient care, administer medications, and support patients and families in healthcare settings.",
        salary_range: "$60,000 - $100,000",
        growth: "Very High (9% growth)",
        required_skills: &["Patient Care", "Medical Knowledge", "Communication", "Critical Thinking", "Empathy"],
        education: "Associate or Bachelor's in Nursing, RN license",
        work_environment: "Hospital/Clinic",
        key_tasks: &["Administer medications", "Monitor patients", "Educate families", "Coordinate care"],
        pros: &["Meaningful work", "Job security", "Flexible schedules", "High demand"],
        cons: &["Emotional stress", "Physical demands", "Shift work", "Difficult patients"],
        related_careers: &["Nurse Practitioner", "Healthcare Administrator", "Physical Therapist"],
        roadmap: RoadmapKey::Generic,
    },
    CareerProfile {
        id: "teacher",
        title: "Elementary School Teacher",
        description: "Educate and inspire young students while creating engaging learning environments and curricula.",
        salary_range: "$40,000 - $70,000",
        growth: "Medium (4% growth)",
        required_skills: &["Teaching", "Communication", "Patience", "Creativity", "Classroom Management"],
        education: "Bachelor's in Education or subject area, teaching license",
        work_environment: "School",
        key_tasks: &["Plan lessons", "Teach students", "Assess progress", "Communicate with parents"],
        pros: &["Meaningful impact", "Summers off", "Job security", "Helping children grow"],
        cons: &["Low pay", "Challenging students", "Long hours", "Limited resources"],
        related_careers: &["School Counselor", "Curriculum Developer", "Educational Technology Specialist"],
        roadmap: RoadmapKey::Generic,
    },
    CareerProfile {
        id: "mechanical-engineer",
        title: "Mechanical Engineer",
        description: "Design, develop, and test mechanical devices, engines, and machines across various industries.",
        salary_range: "$70,000 - $120,000",
        growth: "Medium (4% growth)",
        required_skills: &["CAD Software", "Problem Solving", "Math", "Physics", "Project Management"],
        education: "Bachelor's in Mechanical Engineering",
        work_environment: "Office/Manufacturing",
        key_tasks: &["Design mechanical systems", "Test prototypes", "Analyze performance", "Improve designs"],
        pros: &["Diverse industries", "Good pay", "Innovation opportunities", "Problem-solving"],
        cons: &["Complex projects", "Pressure for perfection", "Long development cycles"],
        related_careers: &["Design Engineer", "Manufacturing Engineer", "Aerospace Engineer"],
        roadmap: RoadmapKey::Generic,
    },
    CareerProfile {
        id: "graphic-designer",
        title: "Graphic Designer",
        description: "Create visual concepts and designs for various media including print, digital, and multimedia platforms.",
        salary_range: "$35,000 - $75,000",
        growth: "Medium (3% growth)",
        required_skills: &["Design Software", "Creativity", "Typography", "Color Theory", "Communication"],
        education: "Bachelor's in Graphic Design or related field",
        work_environment: "Office/Remote",
        key_tasks: &["Create visual designs", "Work with clients", "Develop branding", "Produce layouts"],
        pros: &["Creative expression", "Diverse projects", "Flexible work", "Visual impact"],
        cons: &["Client revisions", "Tight deadlines", "Subjective feedback", "Competitive field"],
        related_careers: &["Art Director", "Web Designer", "Brand Designer"],
        roadmap: RoadmapKey::Generic,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_roadmap_keys_agree_with_titles() {
        for career in CATALOG {
            assert_eq!(
                RoadmapKey::from_title(career.title),
                career.roadmap,
                "{} carries a roadmap key that its title would not derive",
                career.title
            );
        }
    }

    #[test]
    fn test_find_career() {
        assert_eq!(find_career("nurse").map(|c| c.title), Some("Registered Nurse"));
        assert!(find_career("astronaut").is_none());
    }
}
