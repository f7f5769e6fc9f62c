use crate::models::role::Role;

#[derive(Clone, Copy)]
pub struct SeedUser {
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub password: &'static str,
}

#[derive(Clone, Copy)]
pub struct SeedCourse {
    pub title: &'static str,
    pub description: &'static str,
}

/// Number of consecutive courses each student is registered for.
pub const COURSES_PER_STUDENT: usize = 3;

pub const USERS: &[SeedUser] = &[
    SeedUser {
        name: "Admin User",
        email: "admin@example.com",
        role: Role::Admin,
        password: "lopalopes2008",
    },
    SeedUser {
        name: "Student One",
        email: "student1@example.com",
        role: Role::Student,
        password: "student123",
    },
    SeedUser {
        name: "Student Two",
        email: "student2@example.com",
        role: Role::Student,
        password: "student234",
    },
    SeedUser {
        name: "Student Three",
        email: "student3@example.com",
        role: Role::Student,
        password: "student345",
    },
    SeedUser {
        name: "Teacher One",
        email: "teacher1@example.com",
        role: Role::Teacher,
        password: "teacher123",
    },
    SeedUser {
        name: "Teacher Two",
        email: "teacher2@example.com",
        role: Role::Teacher,
        password: "teacher234",
    },
    SeedUser {
        name: "Teacher Three",
        email: "teacher3@example.com",
        role: Role::Teacher,
        password: "teacher345",
    },
];

pub const COURSES: &[SeedCourse] = &[
    SeedCourse {
        title: "Introduction to Python",
        description: "A beginner's course on Python programming.",
    },
    SeedCourse {
        title: "Web Development with FastAPI",
        description: "Learn to build modern and scalable web APIs.",
    },
    SeedCourse {
        title: "Database Management",
        description: "Fundamentals of SQL, normalization, and design.",
    },
    SeedCourse {
        title: "Machine Learning Basics",
        description: "An introduction to algorithms that learn from data.",
    },
    SeedCourse {
        title: "Frontend Development with React",
        description: "Build interactive interfaces using React.",
    },
    SeedCourse {
        title: "Data Structures and Algorithms",
        description: "Master the foundations of problem solving.",
    },
    SeedCourse {
        title: "Software Engineering Principles",
        description: "Learn best practices in software design.",
    },
    SeedCourse {
        title: "Operating Systems",
        description: "Understand how computers manage resources and processes.",
    },
    SeedCourse {
        title: "Cybersecurity Fundamentals",
        description: "Basics of security, encryption, and ethical hacking.",
    },
];
