//! Static sampling universe for synthetic resumes.
//!
//! Every table is read-only and shared by all requests. Entries are ASCII so
//! they render with the built-in PDF fonts unchanged.

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Avery", "Quinn", "Blake", "Cameron",
    "Drew", "Emery", "Finley", "Hayden", "Jamie", "Kendall", "Logan", "Parker", "Reese", "Sage",
    "Skyler", "Tatum", "River", "Phoenix", "Rowan", "Dakota", "Indigo", "Cedar", "Aspen", "Willow",
    "Juniper",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
    "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres",
    "Nguyen", "Hill", "Flores",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "company.com",
];

pub const STREET_NAMES: &[&str] = &[
    "Main St", "Oak Ave", "Pine Rd", "Cedar Ln", "Maple Dr", "Elm St", "First Ave", "Second St",
];

/// City and state are sampled together so they always agree.
pub const CITIES: &[(&str, &str)] = &[
    ("New York", "NY"),
    ("Los Angeles", "CA"),
    ("Chicago", "IL"),
    ("Houston", "TX"),
    ("Phoenix", "AZ"),
    ("Philadelphia", "PA"),
    ("San Antonio", "TX"),
    ("San Diego", "CA"),
    ("Dallas", "TX"),
    ("San Jose", "CA"),
];

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Data Scientist", "Product Manager", "UX Designer", "DevOps Engineer",
    "Full Stack Developer", "Data Analyst", "Marketing Manager", "Sales Representative",
    "Project Manager", "Business Analyst", "System Administrator", "Frontend Developer",
    "Backend Developer", "Mobile Developer", "Cloud Architect", "Cybersecurity Specialist",
    "Machine Learning Engineer", "Database Administrator", "Quality Assurance Engineer",
    "Technical Writer", "Solutions Architect", "Scrum Master", "IT Consultant", "Network Engineer",
    "UI/UX Designer", "Digital Marketing Specialist", "Content Manager", "Operations Manager",
    "Financial Analyst", "HR Specialist", "Customer Success Manager",
];

pub const COMPANIES: &[&str] = &[
    "TechCorp", "InnovateLabs", "DataFlow Systems", "CloudTech Solutions", "Digital Dynamics",
    "NextGen Technologies", "FutureSoft Inc", "SmartData Corp", "CyberGuard Systems",
    "Quantum Computing Ltd", "AI Innovations", "Blockchain Solutions", "WebCraft Studios",
    "MobileFirst Inc", "DevOps Pro", "SecurityFirst Corp", "Analytics Plus", "Machine Learning Co",
    "Database Masters", "Quality Assurance Ltd", "Project Management Pro",
    "Business Intelligence Inc", "Customer Experience Co", "Digital Transformation Ltd",
    "Agile Solutions", "Scalable Systems", "Performance Tech", "Reliability Corp", "Innovation Hub",
    "Technology Partners", "Digital Excellence",
];

pub const SKILLS: &[&str] = &[
    "Python", "JavaScript", "Java", "C++", "C#", "Go", "Rust", "Swift", "Kotlin", "React",
    "Angular", "Vue.js", "Node.js", "Express.js", "Django", "Flask", "Spring Boot", "Laravel",
    "Ruby on Rails", "ASP.NET", "FastAPI", "Gin", "PostgreSQL", "MySQL", "MongoDB", "Redis",
    "Elasticsearch", "Cassandra", "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes",
    "Terraform", "Jenkins", "GitLab CI", "GitHub Actions", "Ansible", "Puppet", "Chef", "Linux",
    "Windows Server", "macOS", "Ubuntu", "CentOS", "Red Hat", "Git", "SVN", "Mercurial", "Jira",
    "Confluence", "Slack", "Microsoft Teams", "Agile", "Scrum", "Kanban", "DevOps", "CI/CD",
    "Microservices", "REST API", "GraphQL", "gRPC", "WebSocket", "OAuth", "JWT", "SSL/TLS", "HTTPS",
    "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy",
    "Matplotlib", "Seaborn", "Jupyter", "Tableau", "Power BI",
];

pub const UNIVERSITIES: &[&str] = &[
    "Stanford University", "MIT", "Harvard University", "UC Berkeley", "Carnegie Mellon",
    "University of Washington", "Georgia Tech", "University of Illinois", "UT Austin",
    "University of Michigan", "Cornell University", "Princeton University", "Yale University",
    "Columbia University", "University of Pennsylvania", "Duke University",
    "Northwestern University", "University of Chicago", "Rice University", "Vanderbilt University",
    "Emory University", "University of Virginia", "University of North Carolina",
    "Wake Forest University", "Georgetown University", "Boston University",
    "Northeastern University", "Tufts University", "University of Southern California", "UCLA",
    "UC San Diego", "UC Irvine", "UC Davis", "Arizona State University", "University of Arizona",
    "University of Colorado", "University of Utah", "University of Oregon", "Oregon State",
];

pub const DEGREES: &[&str] = &["Bachelor's", "Master's", "PhD", "Associate's"];

pub const MAJORS: &[&str] = &[
    "Computer Science", "Software Engineering", "Information Technology", "Data Science",
    "Computer Engineering", "Electrical Engineering", "Mathematics", "Statistics", "Physics",
    "Business Administration", "Marketing", "Finance", "Economics", "Psychology", "Communications",
    "Graphic Design", "Digital Media", "Cybersecurity", "Information Systems",
    "Management Information Systems", "Operations Research", "Industrial Engineering",
    "Mechanical Engineering", "Biomedical Engineering", "Chemical Engineering", "Civil Engineering",
    "Environmental Engineering",
];

pub const RESPONSIBILITIES: &[&str] = &[
    "Led development of scalable web applications using modern technologies, resulting in 30% performance improvement.",
    "Collaborated with cross-functional teams to deliver high-quality software solutions on time and within budget.",
    "Implemented automated testing and CI/CD pipelines, reducing deployment time by 50%.",
    "Designed and maintained database schemas, optimizing query performance and ensuring data integrity.",
    "Mentored junior developers and conducted code reviews to maintain high code quality standards.",
    "Analyzed business requirements and translated them into technical specifications and implementation plans.",
    "Participated in agile development processes including sprint planning, daily standups, and retrospectives.",
    "Troubleshot and resolved complex technical issues, improving system reliability and user experience.",
];

pub const SUMMARIES: &[&str] = &[
    "Experienced software professional with a passion for creating innovative solutions and driving technical excellence.",
    "Results-driven developer with expertise in full-stack development and a track record of delivering high-quality software.",
    "Detail-oriented technical professional with strong problem-solving skills and experience in agile development methodologies.",
    "Creative and analytical professional with a proven ability to design and implement scalable software solutions.",
    "Collaborative team player with excellent communication skills and a commitment to continuous learning and improvement.",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_skill_pool_holds_enough_distinct_entries() {
        let distinct: HashSet<&str> = SKILLS.iter().copied().collect();
        assert_eq!(distinct.len(), SKILLS.len(), "skill pool has duplicates");
        assert!(distinct.len() >= 15);
    }

    #[test]
    fn test_responsibility_pool_covers_four_picks() {
        assert!(RESPONSIBILITIES.len() >= 4);
    }

    #[test]
    fn test_pools_are_printable_ascii() {
        let all = FIRST_NAMES
            .iter()
            .chain(LAST_NAMES)
            .chain(JOB_TITLES)
            .chain(COMPANIES)
            .chain(SKILLS)
            .chain(UNIVERSITIES)
            .chain(MAJORS)
            .chain(RESPONSIBILITIES)
            .chain(SUMMARIES);
        for entry in all {
            assert!(
                entry.chars().all(|c| (' '..='~').contains(&c)),
                "non-ASCII pool entry: {entry}"
            );
        }
    }
}
