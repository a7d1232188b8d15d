//! 組み込みのサイトコンテンツ
//!
//! Webアプリはこの内容をそのまま表示する。CLIは `--catalog` 未指定時に使う。

use crate::types::{
    ContactInfo, ContactLink, ExperienceItem, Profile, ProjectRecord, SectionHeading,
    SiteContent, SocialLinks,
};

const GITHUB_URL: &str = "https://github.com/mithileshgau";
const LINKEDIN_URL: &str = "https://linkedin.com/in/mithilesh-gaurihar";
const EMAIL: &str = "mgauriha@asu.edu";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    tags: &[&str],
    demo_url: &str,
    repo_url: &str,
) -> ProjectRecord {
    ProjectRecord {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        image: image.into(),
        tags: strings(tags),
        demo_url: Some(demo_url.into()),
        repo_url: Some(repo_url.into()),
    }
}

/// 組み込みのプロジェクト一覧（表示順）
pub fn default_projects() -> Vec<ProjectRecord> {
    vec![
        project(
            "1",
            "Class Registration System - Easy Enroll",
            "Easy Enroll is a smart class registration system built on AWS that uses an enhanced Gale-Shapley algorithm and OpenAI's language model to match students with their preferred courses, maximizing overall happiness while preventing the chaos typically associated with course registration",
            "Class_Registration_system.jpg",
            &["React", "Java", "SpringBoot", "OpenAI", "AWS", "EC2"],
            "https://github.com/bhavesh2103/aws-class-registration-system/assets/55141824/8aeefcdc-ecc7-46b5-a6c3-710af7d28b9b",
            "https://github.com/bhavesh2103/aws-class-registration-system",
        ),
        project(
            "2",
            "AI Documentation Generator - DevDoc AI",
            "DevDoc AI is an AI-powered web application that automatically generates comprehensive code documentation by analyzing source files across multiple programming languages, providing developers with an intuitive interface to upload code, preview the resulting documentation, and download it in Markdown format",
            "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=800&q=80",
            &["React", "Python", "Flask", "GeminiAI", "Langchain"],
            "https://devdoc-ai-frontend.onrender.com/",
            "https://github.com/mithileshgau/DevDoc-AI/",
        ),
        project(
            "3",
            "Analysis for Badminton Player Movement",
            "OpenPose-Analysis is a real-time sports analytics project that uses computer vision to track badminton players' movements, extracting key body coordinates to calculate metrics like total distance traveled, average speed, movement heatmaps, and court quadrant dominance for performance evaluation and strategic decision-making.",
            "Sport-Analysis.jpg",
            &["OpenPose Model", "Python", "Google Colab", "Matplotlib"],
            "https://example.com/demo3",
            "https://github.com/mithileshgau/Openpose-Analysis",
        ),
        project(
            "4",
            "Social Media Analytics - TopicBubbler",
            "TopicBubbler is an innovative visual analytics system that enables users to interactively explore social media data across multiple hierarchical levels, offering six distinct visualization views to analyze topics, temporal trends, keyword correlations, and document content from coronavirus-related tweets",
            "Social-media-analysis.jpg",
            &["D3.js", "Python", "FAST-API", "LDA", "CSV", "JSON", "Parquet"],
            "https://example.com/demo4",
            "https://github.com/mithileshgau/topic-bubbler",
        ),
        project(
            "5",
            "Time Series analysis using News Sentiment Data",
            "Time Series analysis using News Sentiment Data is a predictive modeling project that leverages LSTM networks and sentiment analysis of financial news to forecast stock prices with greater accuracy than traditional methods alone.",
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=600&q=80",
            &["Python", "LSTM", "Pandas", "NumPy", "Matplotlib"],
            "https://example.com/demo5",
            "https://github.com/mithileshgau/Time-Series-Analyis-Using-News-Sentiment",
        ),
    ]
}

/// 組み込みの職歴（新しい順）
pub fn default_experiences() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem {
            id: "1".into(),
            company: "SAP".into(),
            position: "Associate Developer".into(),
            duration: "Jul 2021 - Jul 2023".into(),
            location: "India".into(),
            description: "Played a key role as a Developer in the Agile Project team, developing backend services and responsive user interfaces while ensuring data integrity and resolving customer incidents.".into(),
            achievements: strings(&[
                "Developed a Commodity Management project using Node.js and Express for the backend",
                "Utilized React to build responsive user interfaces, improving overall user experience and reducing load times by 30%",
                "Developed RESTful APIs with Express.js to facilitate seamless communication between frontend and backend services",
                "Efficiently resolved more than 10 Priority-3 customer incidents",
                "Created utility software with Node.js to reduce data inconsistencies by 20%",
                "Conducted database administration and consistency testing for 4 tables in SAP HANA DB",
                "Improved team productivity by 15% through GitHub for version control and collaborative development",
            ]),
            skills: strings(&[
                "Node.js",
                "Express.js",
                "React",
                "RESTful APIs",
                "SAP HANA DB",
                "GitHub",
                "Database Administration",
                "Agile Methodology",
            ]),
            logo: Some("Sap-01.png".into()),
            current: false,
        },
        ExperienceItem {
            id: "2".into(),
            company: "SAP".into(),
            position: "Software Engineer Intern".into(),
            duration: "Jun 2019 - Aug 2020".into(),
            location: "Remote".into(),
            description: "Developed a full-stack web application for monitoring periodically operating schedulers while improving system reliability and performance.".into(),
            achievements: strings(&[
                "Built a comprehensive monitoring system for 5 periodically operating schedulers",
                "Integrated real-time API calls into the scheduler system, decreasing scheduling errors by 30%",
                "Performed unit testing on developed code, improving code quality by 25% and reducing post-deployment issues",
                "Accelerated decision-making and improved resource allocation effectiveness through system optimizations",
            ]),
            skills: strings(&[
                "Full-stack Development",
                "API Integration",
                "Unit Testing",
                "Web Application Development",
                "Scheduler Monitoring",
                "Code Quality Assurance",
            ]),
            logo: Some("Sap-01.png".into()),
            current: false,
        },
    ]
}

/// 組み込みのプロフィール
pub fn default_profile() -> Profile {
    Profile {
        name: "Mithilesh Gaurihar".into(),
        title: "Software Developer".into(),
        description: "Innovative Software Engineer with MS in Computer Science from Arizona State University and 2+ years of global experience at SAP Labs. Proficient in full-stack development using JavaScript, Python, React, and Node.js, with expertise in cloud technologies (AWS) and database management. Skilled in AI integration, having developed applications utilizing OpenAI and Gemini AI APIs. Seeking to leverage technical expertise and problem-solving abilities in challenging development projects".into(),
        avatar_url: "photo.jpg".into(),
        resume_url: "MithileshGaurihar_Resume.pdf".into(),
        social_links: SocialLinks {
            github: Some(GITHUB_URL.into()),
            linkedin: Some(LINKEDIN_URL.into()),
            email: Some(format!("mailto:{}", EMAIL)),
        },
    }
}

/// 組み込みのコンタクト情報
pub fn default_contact() -> ContactInfo {
    ContactInfo {
        intro: "I'm always open to discussing new projects, opportunities, or partnerships. Feel free to reach out!".into(),
        email: ContactLink {
            label: EMAIL.into(),
            href: format!("mailto:{}", EMAIL),
        },
        github: ContactLink {
            label: "github.com/mithileshgau".into(),
            href: GITHUB_URL.into(),
        },
        linkedin: ContactLink {
            label: "linkedin.com/in/mithilesh-gaurihar".into(),
            href: LINKEDIN_URL.into(),
        },
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            owner: "Mithilesh Gaurihar".into(),
            profile: default_profile(),
            projects_heading: SectionHeading {
                title: "My Projects".into(),
                subtitle: "A showcase of my recent work, personal projects, and contributions to open-source software.".into(),
            },
            projects: default_projects(),
            experience_heading: SectionHeading {
                title: "Professional Experience".into(),
                subtitle: "My journey in the software development industry".into(),
            },
            experiences: default_experiences(),
            contact: default_contact(),
        }
    }
}
