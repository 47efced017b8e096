//! Profile algebra for packaging
//!
//! Computes which profiles take part in packaging and merges them onto the
//! base descriptor:
//!
//! 1. `excluded` = default profiles ∩ provided-scope profiles
//! 2. `retained` = included profiles not in `excluded` (order preserved)
//! 3. merge order is `uberjar` followed by `retained`
//! 4. the merged `uberjar-inclusions` are appended to `jar-inclusions`
//!
//! ```text
//! default:  [base, dev, provided]
//! provided: [provided, container]
//! included: [base, dev, provided, container]
//!
//! excluded: {provided}
//! result:   [uberjar, base, dev, container]
//! ```

use std::collections::HashSet;

use crate::config::{Directive, Profile, ProjectDescriptor};

/// Name of the packaging profile merged first
pub const UBERJAR_PROFILE: &str = "uberjar";

/// Profiles merged onto the base descriptor, in merge order
pub fn effective_profiles(project: &ProjectDescriptor) -> Vec<String> {
    let default: HashSet<&str> = project.default_profiles.iter().map(String::as_str).collect();
    let excluded: HashSet<&str> = project
        .provided_profiles
        .iter()
        .map(String::as_str)
        .filter(|name| default.contains(name))
        .collect();

    let mut profiles = vec![UBERJAR_PROFILE.to_string()];
    for name in project.included_profiles() {
        if excluded.contains(name.as_str()) {
            log::debug!("Excluding default provided-scope profile '{}'", name);
            continue;
        }
        if name != UBERJAR_PROFILE && !profiles.contains(name) {
            profiles.push(name.clone());
        }
    }
    profiles
}

/// Descriptor with the packaging profiles merged in
///
/// Profile names without a definition are skipped; an undeclared `uberjar`
/// profile is the common case.
pub fn effective_descriptor(project: &ProjectDescriptor) -> ProjectDescriptor {
    let mut effective = project.clone();

    for name in effective_profiles(project) {
        match project.profiles.get(&name) {
            Some(profile) => {
                log::debug!("Merging profile '{}'", name);
                merge_profile(&mut effective, profile);
            }
            None => log::debug!("Profile '{}' is not defined, skipping", name),
        }
    }

    let uberjar_inclusions = std::mem::take(&mut effective.uberjar_inclusions);
    effective.jar_inclusions.extend(uberjar_inclusions);
    effective
}

/// Apply one profile's directives to a descriptor, in order
pub fn merge_profile(target: &mut ProjectDescriptor, profile: &Profile) {
    for directive in profile.directives() {
        apply_directive(target, directive);
    }
}

fn apply_directive(target: &mut ProjectDescriptor, directive: Directive) {
    match directive {
        Directive::AddDependency(coordinate) => {
            match target
                .dependencies
                .iter_mut()
                .find(|dep| dep.key() == coordinate.key())
            {
                Some(existing) => *existing = coordinate,
                None => target.dependencies.push(coordinate),
            }
        }
        Directive::ManageDependency(coordinate) => {
            match target
                .managed_dependencies
                .iter_mut()
                .find(|dep| dep.key() == coordinate.key())
            {
                Some(existing) => *existing = coordinate,
                None => target.managed_dependencies.push(coordinate),
            }
        }
        Directive::Exclude(key) => {
            if !target.exclusions.contains(&key) {
                target.exclusions.push(key);
            }
        }
        Directive::IncludeInJar(pattern) => target.jar_inclusions.push(pattern),
        Directive::IncludeInUberjar(pattern) => target.uberjar_inclusions.push(pattern),
        Directive::SetSetting(key, value) => {
            target.settings.insert(key, value);
        }
    }
}
