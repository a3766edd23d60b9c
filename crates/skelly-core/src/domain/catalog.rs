//! Library catalog.
//!
//! Static, read-only tables of the optional libraries a user can pick per
//! stack. The `value` of an entry is forwarded verbatim into
//! `ProjectConfig`'s library lists; a single entry may name several
//! whitespace-separated packages that are installed together.
//!
//! # Adding a Library
//!
//! Add one [`LibraryChoice`] to the stack's table. Strategies need no change:
//! backends and frontends treat library values as opaque package names.

use crate::domain::value_objects::{BackendStack, FrontendStack};

/// One selectable library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryChoice {
    /// What the user sees.
    pub title: &'static str,
    /// What ends up in the manifest (real package name(s)).
    pub value: &'static str,
}

const fn lib(title: &'static str, value: &'static str) -> LibraryChoice {
    LibraryChoice { title, value }
}

pub static JAVA_LIBRARIES: &[LibraryChoice] = &[
    lib("Lombok (Boilerplate reduction)", "lombok"),
    lib("Spring Security (Auth)", "spring-boot-starter-security"),
    lib("Spring Data JPA (Database)", "spring-boot-starter-data-jpa"),
    lib("Spring Boot Actuator (Monitoring)", "spring-boot-starter-actuator"),
    lib("MapStruct (Mapper)", "mapstruct"),
];

pub static EXPRESS_LIBRARIES: &[LibraryChoice] = &[
    lib("Helmet (Security Headers)", "helmet"),
    lib("Morgan (Logging)", "morgan"),
    lib("Cors (Cross-Origin Resource Sharing)", "cors"),
    lib("Dotenv (Environment Variables)", "dotenv"),
    lib("Joi (Validation)", "joi"),
    lib("Zod (Validation)", "zod"),
    lib("Mongoose (MongoDB ODM)", "mongoose"),
];

pub static DJANGO_LIBRARIES: &[LibraryChoice] = &[
    lib("Django REST Framework (API)", "djangorestframework"),
    lib("Django CORS Headers", "django-cors-headers"),
    lib("Django Debug Toolbar", "django-debug-toolbar"),
    lib("Celery (Async Tasks)", "celery"),
];

pub static REACT_LIBRARIES: &[LibraryChoice] = &[
    lib("Redux Toolkit", "@reduxjs/toolkit react-redux"),
    lib("React Router", "react-router-dom"),
    lib("TanStack Query", "@tanstack/react-query"),
    lib("Tailwind CSS", "tailwindcss postcss autoprefixer"),
    lib("Material UI", "@mui/material @emotion/react @emotion/styled"),
];

pub static LIT_LIBRARIES: &[LibraryChoice] = &[lib("Lit Router", "@lit-labs/router")];

pub static ANGULAR_LIBRARIES: &[LibraryChoice] = &[lib("Angular Material", "@angular/material")];

/// Libraries offered for a backend stack.
pub fn backend_libraries(stack: BackendStack) -> &'static [LibraryChoice] {
    match stack {
        BackendStack::Java => JAVA_LIBRARIES,
        BackendStack::Express => EXPRESS_LIBRARIES,
        BackendStack::Django => DJANGO_LIBRARIES,
    }
}

/// Libraries offered for a frontend stack; empty for a backend-only project.
pub fn frontend_libraries(stack: FrontendStack) -> &'static [LibraryChoice] {
    match stack {
        FrontendStack::React => REACT_LIBRARIES,
        FrontendStack::Lit => LIT_LIBRARIES,
        FrontendStack::Angular => ANGULAR_LIBRARIES,
        FrontendStack::None => &[],
    }
}
