//! Result codes of the directory access protocol client library.
//!
//! `0x09` is listed twice: the v2 referral code and the partial-results code
//! share a value. Table construction keeps the later row.

use super::CodeEntry;

pub static ENTRIES: &[CodeEntry] = &[
    CodeEntry::named(0x00, "LDAP_SUCCESS"),
    CodeEntry::named(0x01, "LDAP_OPERATIONS_ERROR"),
    CodeEntry::named(0x02, "LDAP_PROTOCOL_ERROR"),
    CodeEntry::named(0x03, "LDAP_TIMELIMIT_EXCEEDED"),
    CodeEntry::named(0x04, "LDAP_SIZELIMIT_EXCEEDED"),
    CodeEntry::named(0x05, "LDAP_COMPARE_FALSE"),
    CodeEntry::named(0x06, "LDAP_COMPARE_TRUE"),
    CodeEntry::named(0x07, "LDAP_AUTH_METHOD_NOT_SUPPORTED"),
    CodeEntry::named(0x08, "LDAP_STRONG_AUTH_REQUIRED"),
    CodeEntry::named(0x09, "LDAP_REFERRAL_V2"),
    CodeEntry::named(0x09, "LDAP_PARTIAL_RESULTS"),
    CodeEntry::named(0x0A, "LDAP_REFERRAL"),
    CodeEntry::named(0x0B, "LDAP_ADMIN_LIMIT_EXCEEDED"),
    CodeEntry::named(0x0C, "LDAP_UNAVAILABLE_CRIT_EXTENSION"),
    CodeEntry::named(0x0D, "LDAP_CONFIDENTIALITY_REQUIRED"),
    CodeEntry::named(0x0E, "LDAP_SASL_BIND_IN_PROGRESS"),
    CodeEntry::named(0x10, "LDAP_NO_SUCH_ATTRIBUTE"),
    CodeEntry::named(0x11, "LDAP_UNDEFINED_TYPE"),
    CodeEntry::named(0x12, "LDAP_INAPPROPRIATE_MATCHING"),
    CodeEntry::named(0x13, "LDAP_CONSTRAINT_VIOLATION"),
    CodeEntry::named(0x14, "LDAP_ATTRIBUTE_OR_VALUE_EXISTS"),
    CodeEntry::named(0x15, "LDAP_INVALID_SYNTAX"),
    CodeEntry::named(0x20, "LDAP_NO_SUCH_OBJECT"),
    CodeEntry::named(0x21, "LDAP_ALIAS_PROBLEM"),
    CodeEntry::named(0x22, "LDAP_INVALID_DN_SYNTAX"),
    CodeEntry::named(0x23, "LDAP_IS_LEAF"),
    CodeEntry::named(0x24, "LDAP_ALIAS_DEREF_PROBLEM"),
    CodeEntry::named(0x30, "LDAP_INAPPROPRIATE_AUTH"),
    CodeEntry::named(0x31, "LDAP_INVALID_CREDENTIALS"),
    CodeEntry::named(0x32, "LDAP_INSUFFICIENT_RIGHTS"),
    CodeEntry::named(0x33, "LDAP_BUSY"),
    CodeEntry::named(0x34, "LDAP_UNAVAILABLE"),
    CodeEntry::named(0x35, "LDAP_UNWILLING_TO_PERFORM"),
    CodeEntry::named(0x36, "LDAP_LOOP_DETECT"),
    CodeEntry::named(0x3C, "LDAP_SORT_CONTROL_MISSING"),
    CodeEntry::named(0x3D, "LDAP_OFFSET_RANGE_ERROR"),
    CodeEntry::named(0x40, "LDAP_NAMING_VIOLATION"),
    CodeEntry::named(0x41, "LDAP_OBJECT_CLASS_VIOLATION"),
    CodeEntry::named(0x42, "LDAP_NOT_ALLOWED_ON_NONLEAF"),
    CodeEntry::named(0x43, "LDAP_NOT_ALLOWED_ON_RDN"),
    CodeEntry::named(0x44, "LDAP_ALREADY_EXISTS"),
    CodeEntry::named(0x45, "LDAP_NO_OBJECT_CLASS_MODS"),
    CodeEntry::named(0x46, "LDAP_RESULTS_TOO_LARGE"),
    CodeEntry::named(0x47, "LDAP_AFFECTS_MULTIPLE_DSAS"),
    CodeEntry::named(0x4C, "LDAP_VIRTUAL_LIST_VIEW_ERROR"),
    CodeEntry::named(0x50, "LDAP_OTHER"),
    CodeEntry::named(0x51, "LDAP_SERVER_DOWN"),
    CodeEntry::named(0x52, "LDAP_LOCAL_ERROR"),
    CodeEntry::named(0x53, "LDAP_ENCODING_ERROR"),
    CodeEntry::named(0x54, "LDAP_DECODING_ERROR"),
    CodeEntry::named(0x55, "LDAP_TIMEOUT"),
    CodeEntry::named(0x56, "LDAP_AUTH_UNKNOWN"),
    CodeEntry::named(0x57, "LDAP_FILTER_ERROR"),
    CodeEntry::named(0x58, "LDAP_USER_CANCELLED"),
    CodeEntry::named(0x59, "LDAP_PARAM_ERROR"),
    CodeEntry::named(0x5A, "LDAP_NO_MEMORY"),
    CodeEntry::named(0x5B, "LDAP_CONNECT_ERROR"),
    CodeEntry::named(0x5C, "LDAP_NOT_SUPPORTED"),
    CodeEntry::named(0x5E, "LDAP_NO_RESULTS_RETURNED"),
    CodeEntry::named(0x5D, "LDAP_CONTROL_NOT_FOUND"),
    CodeEntry::named(0x5F, "LDAP_MORE_RESULTS_TO_RETURN"),
    CodeEntry::named(0x60, "LDAP_CLIENT_LOOP"),
    CodeEntry::named(0x61, "LDAP_REFERRAL_LIMIT_EXCEEDED"),
];
