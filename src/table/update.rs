//! Result codes reported by the update agent (`WU_S_*` successes, `WU_E_*` failures).

use super::CodeEntry;

pub static ENTRIES: &[CodeEntry] = &[
    CodeEntry::described(0x0024_0001, "WU_S_SERVICE_STOP", "Windows Update Agent was stopped successfully"),
    CodeEntry::described(0x0024_0002, "WU_S_SELFUPDATE", "Windows Update Agent updated itself"),
    CodeEntry::described(0x0024_0003, "WU_S_UPDATE_ERROR", "Operation completed successfully but there were errors applying the updates"),
    CodeEntry::described(0x0024_0004, "WU_S_MARKED_FOR_DISCONNECT", "A callback was marked to be disconnected later because the request to disconnect the operation came while a callback was executing"),
    CodeEntry::described(0x0024_0005, "WU_S_REBOOT_REQUIRED", "The system must be restarted to complete installation of the update"),
    CodeEntry::described(0x0024_0006, "WU_S_ALREADY_INSTALLED", "The update to be installed is already installed on the system"),
    CodeEntry::described(0x0024_0007, "WU_S_ALREADY_UNINSTALLED", "The update to be removed is not installed on the system"),
    CodeEntry::described(0x0024_0008, "WU_S_ALREADY_DOWNLOADED", "The update to be downloaded has already been downloaded"),
    CodeEntry::described(0x0024_0009, "WU_S_SOME_UPDATES_SKIPPED_ON_BATTERY", "The operation completed successfully, but some updates were skipped because the system is running on batteries"),
    CodeEntry::described(0x0024_000A, "WU_S_ALREADY_REVERTED", "The update to be reverted is not present on the system"),
    CodeEntry::described(0x0024_0010, "WU_S_SEARCH_CRITERIA_NOT_SUPPORTED", "The operation is skipped because the update service does not support the requested search criteria"),
    CodeEntry::described(0x0024_2015, "WU_S_UH_INSTALLSTILLPENDING", "The installation operation for the update is still in progress"),
    CodeEntry::described(0x0024_2016, "WU_S_UH_DOWNLOAD_SIZE_CALCULATED", "The actual download size has been calculated by the handler"),
    CodeEntry::described(0x0024_5001, "WU_S_SIH_NOOP", "No operation was required by the server-initiated healing server response"),
    CodeEntry::described(0x0024_6001, "WU_S_DM_ALREADYDOWNLOADING", "The update to be downloaded is already being downloaded"),
    CodeEntry::described(0x0024_7101, "WU_S_METADATA_SKIPPED_BY_ENFORCEMENTMODE", "Metadata verification was skipped by enforcement mode"),
    CodeEntry::described(0x0024_7102, "WU_S_METADATA_IGNORED_SIGNATURE_VERIFICATION", "A server configuration refresh resulted in metadata signature verification to be ignored"),
    CodeEntry::described(0x0024_8001, "WU_S_SEARCH_LOAD_SHEDDING", "Search operation completed successfully but one or more services were shedding load"),
    CodeEntry::described(0x0024_8002, "WU_S_AAD_DEVICE_TICKET_NOT_NEEDED", "There was no need to retrieve an AAD device ticket"),
    CodeEntry::described(0x8024_0001, "WU_E_NO_SERVICE", "Windows Update Agent was unable to provide the service"),
    CodeEntry::described(0x8024_0002, "WU_E_MAX_CAPACITY_REACHED", "The maximum capacity of the service was exceeded"),
    CodeEntry::described(0x8024_0003, "WU_E_UNKNOWN_ID", "An ID cannot be found"),
    CodeEntry::described(0x8024_0004, "WU_E_NOT_INITIALIZED", "The object could not be initialized"),
    CodeEntry::described(0x8024_0005, "WU_E_RANGEOVERLAP", "The update handler requested a byte range overlapping a previously requested range"),
    CodeEntry::described(0x8024_0006, "WU_E_TOOMANYRANGES", "The requested number of byte ranges exceeds the maximum number (2^31 - 1)"),
    CodeEntry::described(0x8024_0007, "WU_E_INVALIDINDEX", "The index to a collection was invalid"),
    CodeEntry::described(0x8024_0008, "WU_E_ITEMNOTFOUND", "The key for the item queried could not be found"),
    CodeEntry::described(0x8024_0009, "WU_E_OPERATIONINPROGRESS", "Another conflicting operation was in progress. Some operations such as installation cannot be performed twice simultaneously"),
    CodeEntry::described(0x8024_000A, "WU_E_COULDNOTCANCEL", "Cancellation of the operation was not allowed"),
    CodeEntry::described(0x8024_000B, "WU_E_CALL_CANCELLED", "Operation was cancelled"),
    CodeEntry::described(0x8024_000C, "WU_E_NOOP", "No operation was required"),
    CodeEntry::described(0x8024_000D, "WU_E_XML_MISSINGDATA", "Windows Update Agent could not find required information in the update's XML data"),
    CodeEntry::described(0x8024_000E, "WU_E_XML_INVALID", "Windows Update Agent found invalid information in the update's XML data"),
    CodeEntry::described(0x8024_000F, "WU_E_CYCLE_DETECTED", "Circular update relationships were detected in the metadata"),
    CodeEntry::described(0x8024_0010, "WU_E_TOO_DEEP_RELATION", "Update relationships too deep to evaluate were evaluated"),
    CodeEntry::described(0x8024_0011, "WU_E_INVALID_RELATIONSHIP", "An invalid update relationship was detected"),
    CodeEntry::described(0x8024_0012, "WU_E_REG_VALUE_INVALID", "An invalid registry value was read"),
    CodeEntry::described(0x8024_0013, "WU_E_DUPLICATE_ITEM", "Operation tried to add a duplicate item to a list"),
    CodeEntry::described(0x8024_0014, "WU_E_INVALID_INSTALL_REQUESTED", "Updates requested for install are not installable by caller"),
    CodeEntry::described(0x8024_0016, "WU_E_INSTALL_NOT_ALLOWED", "Operation tried to install while another installation was in progress or the system was pending a mandatory restart"),
    CodeEntry::described(0x8024_0017, "WU_E_NOT_APPLICABLE", "Operation was not performed because there are no applicable updates"),
    CodeEntry::described(0x8024_0018, "WU_E_NO_USERTOKEN", "Operation failed because a required user token is missing"),
    CodeEntry::described(0x8024_0019, "WU_E_EXCLUSIVE_INSTALL_CONFLICT", "An exclusive update cannot be installed with other updates at the same time"),
    CodeEntry::described(0x8024_001A, "WU_E_POLICY_NOT_SET", "A policy value was not set"),
    CodeEntry::described(0x8024_001B, "WU_E_SELFUPDATE_IN_PROGRESS", "The operation could not be performed because the Windows Update Agent is self-updating"),
    CodeEntry::described(0x8024_001D, "WU_E_INVALID_UPDATE", "An update contains invalid metadata"),
    CodeEntry::described(0x8024_001E, "WU_E_SERVICE_STOP", "Operation did not complete because the service or system was being shut down"),
    CodeEntry::described(0x8024_001F, "WU_E_NO_CONNECTION", "Operation did not complete because the network connection was unavailable"),
    CodeEntry::described(0x8024_0020, "WU_E_NO_INTERACTIVE_USER", "Operation did not complete because there is no logged-on interactive user"),
    CodeEntry::described(0x8024_0021, "WU_E_TIME_OUT", "Operation did not complete because it timed out"),
    CodeEntry::described(0x8024_0022, "WU_E_ALL_UPDATES_FAILED", "Operation failed for all the updates"),
    CodeEntry::described(0x8024_0023, "WU_E_EULAS_DECLINED", "The license terms for all updates were declined"),
    CodeEntry::described(0x8024_0024, "WU_E_NO_UPDATE", "There are no updates"),
    CodeEntry::described(0x8024_0025, "WU_E_USER_ACCESS_DISABLED", "Group Policy settings prevented access to Windows Update"),
    CodeEntry::described(0x8024_0026, "WU_E_INVALID_UPDATE_TYPE", "The type of update is invalid"),
    CodeEntry::described(0x8024_0027, "WU_E_URL_TOO_LONG", "The URL exceeded the maximum length"),
    CodeEntry::described(0x8024_0028, "WU_E_UNINSTALL_NOT_ALLOWED", "The update could not be uninstalled because the request did not originate from a WSUS server"),
    CodeEntry::described(0x8024_0029, "WU_E_INVALID_PRODUCT_LICENSE", "Search may have missed some updates before there is an unlicensed application on the system"),
    CodeEntry::described(0x8024_002A, "WU_E_MISSING_HANDLER", "A component required to detect applicable updates was missing"),
    CodeEntry::described(0x8024_002B, "WU_E_LEGACYSERVER", "An operation did not complete because it requires a newer version of server"),
    CodeEntry::described(0x8024_002C, "WU_E_BIN_SOURCE_ABSENT", "A delta-compressed update could not be installed because it required the source"),
    CodeEntry::described(0x8024_002D, "WU_E_SOURCE_ABSENT", "A full-file update could not be installed because it required the source"),
    CodeEntry::described(0x8024_002E, "WU_E_WU_DISABLED", "Access to an unmanaged server is not allowed"),
    CodeEntry::described(0x8024_002F, "WU_E_CALL_CANCELLED_BY_POLICY", "Operation did not complete because the DisableWindowsUpdateAccess policy was set"),
    CodeEntry::described(0x8024_0030, "WU_E_INVALID_PROXY_SERVER", "The format of the proxy list was invalid"),
    CodeEntry::described(0x8024_0031, "WU_E_INVALID_FILE", "The file is in the wrong format"),
    CodeEntry::described(0x8024_0032, "WU_E_INVALID_CRITERIA", "The search criteria string was invalid"),
    CodeEntry::described(0x8024_0033, "WU_E_EULA_UNAVAILABLE", "License terms could not be downloaded"),
    CodeEntry::described(0x8024_0034, "WU_E_DOWNLOAD_FAILED", "Update failed to download"),
    CodeEntry::described(0x8024_0035, "WU_E_UPDATE_NOT_PROCESSED", "The update was not processed"),
    CodeEntry::described(0x8024_0036, "WU_E_INVALID_OPERATION", "The object's current state did not allow the operation"),
    CodeEntry::described(0x8024_0037, "WU_E_NOT_SUPPORTED", "The functionality for the operation is not supported"),
    CodeEntry::described(0x8024_0038, "WU_E_WINHTTP_INVALID_FILE", "The downloaded file has an unexpected content type"),
    CodeEntry::described(0x8024_0039, "WU_E_TOO_MANY_RESYNC", "Agent is asked by server to resync too many times"),
    CodeEntry::described(0x8024_0040, "WU_E_NO_SERVER_CORE_SUPPORT", "WUA API method does not run on Server Core installation"),
    CodeEntry::described(0x8024_0041, "WU_E_SYSPREP_IN_PROGRESS", "Service is not available while sysprep is running"),
    CodeEntry::described(0x8024_0042, "WU_E_UNKNOWN_SERVICE", "The update service is no longer registered with AU"),
    CodeEntry::described(0x8024_0043, "WU_E_NO_UI_SUPPORT", "There is no support for WUA UI"),
    CodeEntry::described(0x8024_0044, "WU_E_PER_MACHINE_UPDATE_ACCESS_DENIED", "Only administrators can perform this operation on per-machine updates"),
    CodeEntry::described(0x8024_0045, "WU_E_UNSUPPORTED_SEARCHSCOPE", "A search was attempted with a scope that is not currently supported for this type of search"),
    CodeEntry::described(0x8024_0046, "WU_E_BAD_FILE_URL", "The URL does not point to a file"),
    CodeEntry::described(0x8024_0047, "WU_E_REVERT_NOT_ALLOWED", "The update could not be reverted"),
    CodeEntry::described(0x8024_0048, "WU_E_INVALID_NOTIFICATION_INFO", "The featured update notification info returned by the server is invalid"),
    CodeEntry::described(0x8024_0049, "WU_E_OUTOFRANGE", "The data is out of range"),
    CodeEntry::described(0x8024_004A, "WU_E_SETUP_IN_PROGRESS", "Windows Update agent operations are not available while OS setup is running"),
    CodeEntry::described(0x8024_004B, "WU_E_ORPHANED_DOWNLOAD_JOB", "An orphaned downloadjob was found with no active callers"),
    CodeEntry::described(0x8024_004C, "WU_E_LOW_BATTERY", "An update could not be installed because the system battery power level is too low"),
    CodeEntry::described(0x8024_004D, "WU_E_INFRASTRUCTUREFILE_INVALID_FORMAT", "The downloaded infrastructure file is incorrectly formatted"),
    CodeEntry::described(0x8024_004E, "WU_E_INFRASTRUCTUREFILE_REQUIRES_SSL", "The infrastructure file must be downloaded using strong SSL"),
    CodeEntry::described(0x8024_004F, "WU_E_IDLESHUTDOWN_OPCOUNT_DISCOVERY", "A discovery call contributed to a non-zero operation count at idle timer shutdown"),
    CodeEntry::described(0x8024_0050, "WU_E_IDLESHUTDOWN_OPCOUNT_SEARCH", "A search call contributed to a non-zero operation count at idle timer shutdown"),
    CodeEntry::described(0x8024_0051, "WU_E_IDLESHUTDOWN_OPCOUNT_DOWNLOAD", "A download call contributed to a non-zero operation count at idle timer shutdown"),
    CodeEntry::described(0x8024_0052, "WU_E_IDLESHUTDOWN_OPCOUNT_INSTALL", "An install call contributed to a non-zero operation count at idle timer shutdown"),
    CodeEntry::described(0x8024_0053, "WU_E_IDLESHUTDOWN_OPCOUNT_OTHER", "An unspecified call contributed to a non-zero operation count at idle timer shutdown"),
    CodeEntry::described(0x8024_0054, "WU_E_INTERACTIVE_CALL_CANCELLED", "An interactive user cancelled this operation, which was started from the Windows Update Agent UI"),
    CodeEntry::described(0x8024_0055, "WU_E_AU_CALL_CANCELLED", "Automatic Updates cancelled this operation because it applies to an update that is no longer applicable to this computer"),
    CodeEntry::described(0x8024_0056, "WU_E_SYSTEM_UNSUPPORTED", "This version or edition of the operating system doesn't support the needed functionality"),
    CodeEntry::described(0x8024_0057, "WU_E_NO_SUCH_HANDLER_PLUGIN", "The requested update download or install handler, or update applicability expression evaluator, is not provided by this Agent plugin"),
    CodeEntry::described(0x8024_0058, "WU_E_INVALID_SERIALIZATION_VERSION", "The requested serialization version is not supported"),
    CodeEntry::described(0x8024_0059, "WU_E_NETWORK_COST_EXCEEDS_POLICY", "The current network cost does not meet the conditions set by the network cost policy"),
    CodeEntry::described(0x8024_005A, "WU_E_CALL_CANCELLED_BY_HIDE", "The call is cancelled because it applies to an update that is hidden (no longer applicable to this computer)"),
    CodeEntry::described(0x8024_005B, "WU_E_CALL_CANCELLED_BY_INVALID", "The call is cancelled because it applies to an update that is invalid (no longer applicable to this computer)"),
    CodeEntry::described(0x8024_005C, "WU_E_INVALID_VOLUMEID", "The specified volume id is invalid"),
    CodeEntry::described(0x8024_005D, "WU_E_UNRECOGNIZED_VOLUMEID", "The specified volume id is unrecognized by the system"),
    CodeEntry::described(0x8024_005E, "WU_E_EXTENDEDERROR_NOTSET", "The installation extended error code is not specified"),
    CodeEntry::described(0x8024_005F, "WU_E_EXTENDEDERROR_FAILED", "The installation extended error code is set to general fail"),
    CodeEntry::described(0x8024_0060, "WU_E_IDLESHUTDOWN_OPCOUNT_SERVICEREGISTRATION", "A service registration call contributed to a non-zero operation count at idle timer shutdown"),
    CodeEntry::described(0x8024_0061, "WU_E_FILETRUST_SHA2SIGNATURE_MISSING", "Signature validation of the file fails to find valid SHA2+ signature on MS signed payload"),
    CodeEntry::described(0x8024_0062, "WU_E_UPDATE_NOT_APPROVED", "The update is not in the servicing approval list"),
    CodeEntry::described(0x8024_0063, "WU_E_CALL_CANCELLED_BY_INTERACTIVE_SEARCH", "The search call was cancelled by another interactive search against the same service"),
    CodeEntry::described(0x8024_0064, "WU_E_INSTALL_JOB_RESUME_NOT_ALLOWED", "Resume of install job not allowed due to another installation in progress"),
    CodeEntry::described(0x8024_0065, "WU_E_INSTALL_JOB_NOT_SUSPENDED", "Resume of install job not allowed because job is not suspended"),
    CodeEntry::described(0x8024_0066, "WU_E_INSTALL_USERCONTEXT_ACCESSDENIED", "User context passed to installation from caller with insufficient privileges"),
    CodeEntry::described(0x8024_0067, "WU_E_STANDBY_ACTIVITY_NOT_ALLOWED", "Operation is not allowed because the device is in DC (Direct Current) and DS (Disconnected Standby)"),
    CodeEntry::described(0x8024_0068, "WU_E_COULD_NOT_EVALUATE_PROPERTY", "The property could not be evaluated"),
    CodeEntry::described(0x8024_0FFF, "WU_E_UNEXPECTED", "An operation failed due to reasons not covered by another error code"),
    CodeEntry::described(0x8024_1001, "WU_E_MSI_WRONG_VERSION", "Search may have missed some updates because the Windows Installer is less than version 3.1"),
    CodeEntry::described(0x8024_1002, "WU_E_MSI_NOT_CONFIGURED", "Search may have missed some updates because the Windows Installer is not configured"),
    CodeEntry::described(0x8024_1003, "WU_E_MSP_DISABLED", "Search may have missed some updates because policy has disabled Windows Installer patching"),
    CodeEntry::described(0x8024_1004, "WU_E_MSI_WRONG_APP_CONTEXT", "An update could not be applied because the application is installed per-user"),
    CodeEntry::described(0x8024_1005, "WU_E_MSI_NOT_PRESENT", "Search may have missed some updates because the Windows Installer is less than version 3.1"),
    CodeEntry::described(0x8024_1FFF, "WU_E_MSP_UNEXPECTED", "Search may have missed some updates because there was a failure of the Windows Installer"),
    CodeEntry::described(0x8024_4000, "WU_E_PT_SOAPCLIENT_BASE", "WU_E_PT_SOAPCLIENT_* error codes map to the SOAPCLIENT_ERROR enum of the ATL Server Library"),
    CodeEntry::described(0x8024_4001, "WU_E_PT_SOAPCLIENT_INITIALIZE", "Same as SOAPCLIENT_INITIALIZE_ERROR - initialization of the SOAP client failed, possibly because of an MSXML installation failure"),
    CodeEntry::described(0x8024_4002, "WU_E_PT_SOAPCLIENT_OUTOFMEMORY", "Same as SOAPCLIENT_OUTOFMEMORY - SOAP client failed because it ran out of memory"),
    CodeEntry::described(0x8024_4003, "WU_E_PT_SOAPCLIENT_GENERATE", "Same as SOAPCLIENT_GENERATE_ERROR - SOAP client failed to generate the request"),
    CodeEntry::described(0x8024_4004, "WU_E_PT_SOAPCLIENT_CONNECT", "Same as SOAPCLIENT_CONNECT_ERROR - SOAP client failed to connect to the server"),
    CodeEntry::described(0x8024_4005, "WU_E_PT_SOAPCLIENT_SEND", "Same as SOAPCLIENT_SEND_ERROR - SOAP client failed to send a message for reasons of WU_E_WINHTTP_* error codes"),
    CodeEntry::described(0x8024_4006, "WU_E_PT_SOAPCLIENT_SERVER", "Same as SOAPCLIENT_SERVER_ERROR - SOAP client failed because there was a server error"),
    CodeEntry::described(0x8024_4007, "WU_E_PT_SOAPCLIENT_SOAPFAULT", "Same as SOAPCLIENT_SOAPFAULT - SOAP client failed because there was a SOAP fault for reasons of WU_E_PT_SOAP_* error codes"),
    CodeEntry::described(0x8024_4008, "WU_E_PT_SOAPCLIENT_PARSEFAULT", "Same as SOAPCLIENT_PARSEFAULT_ERROR - SOAP client failed to parse a SOAP fault"),
    CodeEntry::described(0x8024_4009, "WU_E_PT_SOAPCLIENT_READ", "Same as SOAPCLIENT_READ_ERROR - SOAP client failed while reading the response from the server"),
    CodeEntry::described(0x8024_400A, "WU_E_PT_SOAPCLIENT_PARSE", "Same as SOAPCLIENT_PARSE_ERROR - SOAP client failed to parse the response from the server"),
    CodeEntry::described(0x8024_400B, "WU_E_PT_SOAP_VERSION", "Same as SOAP_E_VERSION_MISMATCH - SOAP client found an unrecognizable namespace for the SOAP envelope"),
    CodeEntry::described(0x8024_400C, "WU_E_PT_SOAP_MUST_UNDERSTAND", "Same as SOAP_E_MUST_UNDERSTAND - SOAP client was unable to understand a header"),
    CodeEntry::described(0x8024_400D, "WU_E_PT_SOAP_CLIENT", "Same as SOAP_E_CLIENT - SOAP client found the message was malformed; fix before resending"),
    CodeEntry::described(0x8024_400E, "WU_E_PT_SOAP_SERVER", "Same as SOAP_E_SERVER - The SOAP message could not be processed due to a server error; resend later"),
    CodeEntry::described(0x8024_400F, "WU_E_PT_WMI_ERROR", "There was an unspecified Windows Management Instrumentation (WMI) error"),
    CodeEntry::described(0x8024_4010, "WU_E_PT_EXCEEDED_MAX_SERVER_TRIPS", "The number of round trips to the server exceeded the maximum limit"),
    CodeEntry::described(0x8024_4011, "WU_E_PT_SUS_SERVER_NOT_SET", "WUServer policy value is missing in the registry"),
    CodeEntry::described(0x8024_4012, "WU_E_PT_DOUBLE_INITIALIZATION", "Initialization failed because the object was already initialized"),
    CodeEntry::described(0x8024_4013, "WU_E_PT_INVALID_COMPUTER_NAME", "The computer name could not be determined"),
    CodeEntry::described(0x8024_4015, "WU_E_PT_REFRESH_CACHE_REQUIRED", "The reply from the server indicates that the server was changed or the cookie was invalid; refresh the state of the internal cache and retry"),
    CodeEntry::described(0x8024_4016, "WU_E_PT_HTTP_STATUS_BAD_REQUEST", "Same as HTTP status 400 - the server could not process the request due to invalid syntax"),
    CodeEntry::described(0x8024_4017, "WU_E_PT_HTTP_STATUS_DENIED", "Same as HTTP status 401 - the requested resource requires user authentication"),
    CodeEntry::described(0x8024_4018, "WU_E_PT_HTTP_STATUS_FORBIDDEN", "Same as HTTP status 403 - server understood the request, but declined to fulfill it"),
    CodeEntry::described(0x8024_4019, "WU_E_PT_HTTP_STATUS_NOT_FOUND", "Same as HTTP status 404 - the server cannot find the requested URI (Uniform Resource Identifier)"),
    CodeEntry::described(0x8024_401A, "WU_E_PT_HTTP_STATUS_BAD_METHOD", "Same as HTTP status 405 - the HTTP method is not allowed"),
    CodeEntry::described(0x8024_401B, "WU_E_PT_HTTP_STATUS_PROXY_AUTH_REQ", "Same as HTTP status 407 - proxy authentication is required"),
    CodeEntry::described(0x8024_401C, "WU_E_PT_HTTP_STATUS_REQUEST_TIMEOUT", "Same as HTTP status 408 - the server timed out waiting for the request"),
    CodeEntry::described(0x8024_401D, "WU_E_PT_HTTP_STATUS_CONFLICT", "Same as HTTP status 409 - the request was not completed due to a conflict with the current state of the resource"),
    CodeEntry::described(0x8024_401E, "WU_E_PT_HTTP_STATUS_GONE", "Same as HTTP status 410 - requested resource is no longer available at the server"),
    CodeEntry::described(0x8024_401F, "WU_E_PT_HTTP_STATUS_SERVER_ERROR", "Same as HTTP status 500 - an error internal to the server prevented fulfilling the request"),
    CodeEntry::described(0x8024_4020, "WU_E_PT_HTTP_STATUS_NOT_SUPPORTED", "Same as HTTP status 500 - server does not support the functionality required to fulfill the request"),
    CodeEntry::described(0x8024_4021, "WU_E_PT_HTTP_STATUS_BAD_GATEWAY", "Same as HTTP status 502 - the server, while acting as a gateway or proxy, received an invalid response from the upstream server it accessed in attempting to fulfill the request"),
    CodeEntry::described(0x8024_4022, "WU_E_PT_HTTP_STATUS_SERVICE_UNAVAIL", "Same as HTTP status 503 - the service is temporarily overloaded"),
    CodeEntry::described(0x8024_4023, "WU_E_PT_HTTP_STATUS_GATEWAY_TIMEOUT", "Same as HTTP status 503 - the request was timed out waiting for a gateway"),
    CodeEntry::described(0x8024_4024, "WU_E_PT_HTTP_STATUS_VERSION_NOT_SUP", "Same as HTTP status 505 - the server does not support the HTTP protocol version used for the request"),
    CodeEntry::described(0x8024_4025, "WU_E_PT_FILE_LOCATIONS_CHANGED", "Operation failed due to a changed file location; refresh internal state and resend"),
    CodeEntry::described(0x8024_4026, "WU_E_PT_REGISTRATION_NOT_SUPPORTED", "Operation failed because Windows Update Agent does not support registration with a non-WSUS server"),
    CodeEntry::described(0x8024_4027, "WU_E_PT_NO_AUTH_PLUGINS_REQUESTED", "The server returned an empty authentication information list"),
    CodeEntry::described(0x8024_4028, "WU_E_PT_NO_AUTH_COOKIES_CREATED", "Windows Update Agent was unable to create any valid authentication cookies"),
    CodeEntry::described(0x8024_4029, "WU_E_PT_INVALID_CONFIG_PROP", "A configuration property value was wrong"),
    CodeEntry::described(0x8024_402A, "WU_E_PT_CONFIG_PROP_MISSING", "A configuration property value was missing"),
    CodeEntry::described(0x8024_402B, "WU_E_PT_HTTP_STATUS_NOT_MAPPED", "The HTTP request could not be completed and the reason did not correspond to any of the WU_E_PT_HTTP_* error codes"),
    CodeEntry::described(0x8024_402C, "WU_E_PT_WINHTTP_NAME_NOT_RESOLVED", "Same as ERROR_WINHTTP_NAME_NOT_RESOLVED - the proxy server or target server name cannot be resolved"),
    CodeEntry::described(0x8024_402D, "WU_E_PT_LOAD_SHEDDING", "The server is shedding load"),
    CodeEntry::described(0x8024_402E, "WU_E_PT_CLIENT_ENFORCED_LOAD_SHEDDING", "Windows Update Agent is enforcing honoring the service load shedding interval"),
    CodeEntry::described(0x8024_502D, "WU_E_PT_SAME_REDIR_ID", "Windows Update Agent failed to download a redirector cabinet file with a new redirectorId value from the server during the recovery"),
    CodeEntry::described(0x8024_502E, "WU_E_PT_NO_MANAGED_RECOVER", "A redirector recovery action did not complete because the server is managed"),
    CodeEntry::described(0x8024_402F, "WU_E_PT_ECP_SUCCEEDED_WITH_ERRORS", "External cab file processing completed with some errors"),
    CodeEntry::described(0x8024_4030, "WU_E_PT_ECP_INIT_FAILED", "The external cab processor initialization did not complete"),
    CodeEntry::described(0x8024_4031, "WU_E_PT_ECP_INVALID_FILE_FORMAT", "The format of a metadata file was invalid"),
    CodeEntry::described(0x8024_4032, "WU_E_PT_ECP_INVALID_METADATA", "External cab processor found invalid metadata"),
    CodeEntry::described(0x8024_4033, "WU_E_PT_ECP_FAILURE_TO_EXTRACT_DIGEST", "The file digest could not be extracted from an external cab file"),
    CodeEntry::described(0x8024_4034, "WU_E_PT_ECP_FAILURE_TO_DECOMPRESS_CAB_FILE", "An external cab file could not be decompressed"),
    CodeEntry::described(0x8024_4035, "WU_E_PT_ECP_FILE_LOCATION_ERROR", "External cab processor was unable to get file locations"),
    CodeEntry::described(0x8024_0436, "WU_E_PT_CATALOG_SYNC_REQUIRED", "The server does not support category-specific search; Full catalog search has to be issued instead"),
    CodeEntry::described(0x8024_0437, "WU_E_PT_SECURITY_VERIFICATION_FAILURE", "There was a problem authorizing with the service"),
    CodeEntry::described(0x8024_0438, "WU_E_PT_ENDPOINT_UNREACHABLE", "There is no route or network connectivity to the endpoint"),
    CodeEntry::described(0x8024_0439, "WU_E_PT_INVALID_FORMAT", "The data received does not meet the data contract expectations"),
    CodeEntry::described(0x8024_043A, "WU_E_PT_INVALID_URL", "The url is invalid"),
    CodeEntry::described(0x8024_043B, "WU_E_PT_NWS_NOT_LOADED", "Unable to load NWS runtime"),
    CodeEntry::described(0x8024_043C, "WU_E_PT_PROXY_AUTH_SCHEME_NOT_SUPPORTED", "The proxy auth scheme is not supported"),
    CodeEntry::described(0x8024_043D, "WU_E_SERVICEPROP_NOTAVAIL", "The requested service property is not available"),
    CodeEntry::described(0x8024_043E, "WU_E_PT_ENDPOINT_REFRESH_REQUIRED", "The endpoint provider plugin requires online refresh"),
    CodeEntry::described(0x8024_043F, "WU_E_PT_ENDPOINTURL_NOTAVAIL", "A URL for the requested service endpoint is not available"),
    CodeEntry::described(0x8024_0440, "WU_E_PT_ENDPOINT_DISCONNECTED", "The connection to the service endpoint died"),
    CodeEntry::described(0x8024_0441, "WU_E_PT_INVALID_OPERATION", "The operation is invalid because protocol talker is in an inappropriate state"),
    CodeEntry::described(0x8024_0442, "WU_E_PT_OBJECT_FAULTED", "The object is in a faulted state due to a previous error"),
    CodeEntry::described(0x8024_0443, "WU_E_PT_NUMERIC_OVERFLOW", "The operation would lead to numeric overflow"),
    CodeEntry::described(0x8024_0444, "WU_E_PT_OPERATION_ABORTED", "The operation was aborted"),
    CodeEntry::described(0x8024_0445, "WU_E_PT_OPERATION_ABANDONED", "The operation was abandoned"),
    CodeEntry::described(0x8024_0446, "WU_E_PT_QUOTA_EXCEEDED", "A quota was exceeded"),
    CodeEntry::described(0x8024_0447, "WU_E_PT_NO_TRANSLATION_AVAILABLE", "The information was not available in the specified language"),
    CodeEntry::described(0x8024_0448, "WU_E_PT_ADDRESS_IN_USE", "The address is already being used"),
    CodeEntry::described(0x8024_0449, "WU_E_PT_ADDRESS_NOT_AVAILABLE", "The address is not valid for this context"),
    CodeEntry::described(0x8024_044A, "WU_E_PT_OTHER", "Unrecognized error occurred in the Windows Web Services framework"),
    CodeEntry::described(0x8024_044B, "WU_E_PT_SECURITY_SYSTEM_FAILURE", "A security operation failed in the Windows Web Services framework"),
    CodeEntry::described(0x8024_4100, "WU_E_PT_DATA_BOUNDARY_RESTRICTED", "The client is data boundary restricted and needs to talk to a restricted endpoint"),
    CodeEntry::described(0x8024_4101, "WU_E_PT_GENERAL_AAD_CLIENT_ERROR", "The client hit an error in retrieving AAD device ticket"),
    CodeEntry::described(0x8024_4FFF, "WU_E_PT_UNEXPECTED", "A communication error not covered by another WU_E_PT_* error code"),
    CodeEntry::described(0x8024_5001, "WU_E_REDIRECTOR_LOAD_XML", "The redirector XML document could not be loaded into the DOM class"),
    CodeEntry::described(0x8024_5002, "WU_E_REDIRECTOR_S_FALSE", "The redirector XML document is missing some required information"),
    CodeEntry::described(0x8024_5003, "WU_E_REDIRECTOR_ID_SMALLER", "The redirectorId in the downloaded redirector cab is less than in the cached cab"),
    CodeEntry::described(0x8024_5004, "WU_E_REDIRECTOR_UNKNOWN_SERVICE", "The service ID is not supported in the service environment"),
    CodeEntry::described(0x8024_5005, "WU_E_REDIRECTOR_UNSUPPORTED_CONTENTTYPE", "The response from the redirector server had an unsupported content type"),
    CodeEntry::described(0x8024_5006, "WU_E_REDIRECTOR_INVALID_RESPONSE", "The response from the redirector server had an error status or was invalid"),
    CodeEntry::described(0x8024_5008, "WU_E_REDIRECTOR_ATTRPROVIDER_EXCEEDED_MAX_NAMEVALUE", "The maximum number of name value pairs was exceeded by the attribute provider"),
    CodeEntry::described(0x8024_5009, "WU_E_REDIRECTOR_ATTRPROVIDER_INVALID_NAME", "The name received from the attribute provider was invalid"),
    CodeEntry::described(0x8024_500A, "WU_E_REDIRECTOR_ATTRPROVIDER_INVALID_VALUE", "The value received from the attribute provider was invalid"),
    CodeEntry::described(0x8024_500B, "WU_E_REDIRECTOR_SLS_GENERIC_ERROR", "There was an error in connecting to or parsing the response from the Service Locator Service redirector server"),
    CodeEntry::described(0x8024_500C, "WU_E_REDIRECTOR_CONNECT_POLICY", "Connections to the redirector server are disallowed by managed policy"),
    CodeEntry::described(0x8024_500D, "WU_E_REDIRECTOR_ONLINE_DISALLOWED", "The redirector would go online but is disallowed by caller configuration"),
    CodeEntry::described(0x8024_50FF, "WU_E_REDIRECTOR_UNEXPECTED", "The redirector failed for reasons not covered by another WU_E_REDIRECTOR_* error code"),
    CodeEntry::described(0x8024_5101, "WU_E_SIH_VERIFY_DOWNLOAD_ENGINE", "Verification of the servicing engine package failed"),
    CodeEntry::described(0x8024_5102, "WU_E_SIH_VERIFY_DOWNLOAD_PAYLOAD", "Verification of a servicing package failed"),
    CodeEntry::described(0x8024_5103, "WU_E_SIH_VERIFY_STAGE_ENGINE", "Verification of the staged engine failed"),
    CodeEntry::described(0x8024_5104, "WU_E_SIH_VERIFY_STAGE_PAYLOAD", "Verification of a staged payload failed"),
    CodeEntry::described(0x8024_5105, "WU_E_SIH_ACTION_NOT_FOUND", "An internal error occurred where the servicing action was not found"),
    CodeEntry::described(0x8024_5106, "WU_E_SIH_SLS_PARSE", "There was a parse error in the service environment response"),
    CodeEntry::described(0x8024_5107, "WU_E_SIH_INVALIDHASH", "A downloaded file failed an integrity check"),
    CodeEntry::described(0x8024_5108, "WU_E_SIH_NO_ENGINE", "No engine was provided by the server-initiated healing server response"),
    CodeEntry::described(0x8024_5109, "WU_E_SIH_POST_REBOOT_INSTALL_FAILED", "Post-reboot install failed"),
    CodeEntry::described(0x8024_510A, "WU_E_SIH_POST_REBOOT_NO_CACHED_SLS_RESPONSE", "There were pending reboot actions, but cached SLS response was not found post-reboot"),
    CodeEntry::described(0x8024_510B, "WU_E_SIH_PARSE", "Parsing command line arguments failed"),
    CodeEntry::described(0x8024_510C, "WU_E_SIH_SECURITY", "Security check failed"),
    CodeEntry::described(0x8024_510D, "WU_E_SIH_PPL", "PPL check failed"),
    CodeEntry::described(0x8024_510E, "WU_E_SIH_POLICY", "Execution was disabled by policy"),
    CodeEntry::described(0x8024_510F, "WU_E_SIH_STDEXCEPTION", "A standard exception was caught"),
    CodeEntry::described(0x8024_5110, "WU_E_SIH_NONSTDEXCEPTION", "A non-standard exception was caught"),
    CodeEntry::described(0x8024_5111, "WU_E_SIH_ENGINE_EXCEPTION", "The server-initiated healing engine encountered an exception not covered by another WU_E_SIH_* error code"),
    CodeEntry::described(0x8024_5112, "WU_E_SIH_BLOCKED_FOR_PLATFORM", "You are running SIH Client with cmd not supported on your platform"),
    CodeEntry::described(0x8024_5113, "WU_E_SIH_ANOTHER_INSTANCE_RUNNING", "Another SIH Client is already running"),
    CodeEntry::described(0x8024_5114, "WU_E_SIH_DNSRESILIENCY_OFF", "Disable DNS resiliency feature per service configuration"),
    CodeEntry::described(0x8024_51FF, "WU_E_SIH_UNEXPECTED", "There was a failure for reasons not covered by another WU_E_SIH_* error code"),
    CodeEntry::described(0x8024_C001, "WU_E_DRV_PRUNED", "A driver was skipped"),
    CodeEntry::described(0x8024_C002, "WU_E_DRV_NOPROP_OR_LEGACY", "A property for the driver could not be found. It may not conform with required specifications"),
    CodeEntry::described(0x8024_C003, "WU_E_DRV_REG_MISMATCH", "The registry type read for the driver does not match the expected type"),
    CodeEntry::described(0x8024_C004, "WU_E_DRV_NO_METADATA", "The driver update is missing metadata"),
    CodeEntry::described(0x8024_C005, "WU_E_DRV_MISSING_ATTRIBUTE", "The driver update is missing a required attribute"),
    CodeEntry::described(0x8024_C006, "WU_E_DRV_SYNC_FAILED", "Driver synchronization failed"),
    CodeEntry::described(0x8024_C007, "WU_E_DRV_NO_PRINTER_CONTENT", "Information required for the synchronization of applicable printers is missing"),
    CodeEntry::described(0x8024_C008, "WU_E_DRV_DEVICE_PROBLEM", "After installing a driver update, the updated device has reported a problem"),
    CodeEntry::described(0x8024_CFFF, "WU_E_DRV_UNEXPECTED", "A driver error not covered by another WU_E_DRV_* code"),
    CodeEntry::described(0x8024_8000, "WU_E_DS_SHUTDOWN", "An operation failed because Windows Update Agent is shutting down"),
    CodeEntry::described(0x8024_8001, "WU_E_DS_INUSE", "An operation failed because the data store was in use"),
    CodeEntry::described(0x8024_8002, "WU_E_DS_INVALID", "The current and expected states of the data store do not match"),
    CodeEntry::described(0x8024_8003, "WU_E_DS_TABLEMISSING", "The data store is missing a table"),
    CodeEntry::described(0x8024_8004, "WU_E_DS_TABLEINCORRECT", "The data store contains a table with unexpected columns"),
    CodeEntry::described(0x8024_8005, "WU_E_DS_INVALIDTABLENAME", "A table could not be opened because the table is not in the data store"),
    CodeEntry::described(0x8024_8006, "WU_E_DS_BADVERSION", "The current and expected versions of the data store do not match"),
    CodeEntry::described(0x8024_8007, "WU_E_DS_NODATA", "The information requested is not in the data store"),
    CodeEntry::described(0x8024_8008, "WU_E_DS_MISSINGDATA", "The data store is missing required information or has a NULL in a table column that requires a non-null value"),
    CodeEntry::described(0x8024_8009, "WU_E_DS_MISSINGREF", "The data store is missing required information or has a reference to missing license terms, file, localized property or linked row"),
    CodeEntry::described(0x8024_800A, "WU_E_DS_UNKNOWNHANDLER", "The update was not processed because its update handler could not be recognized"),
    CodeEntry::described(0x8024_800B, "WU_E_DS_CANTDELETE", "The update was not deleted because it is still referenced by one or more services"),
    CodeEntry::described(0x8024_800C, "WU_E_DS_LOCKTIMEOUTEXPIRED", "The data store section could not be locked within the allotted time"),
    CodeEntry::described(0x8024_800D, "WU_E_DS_NOCATEGORIES", "The category was not added because it contains no parent categories and is not a top-level category itself"),
    CodeEntry::described(0x8024_800E, "WU_E_DS_ROWEXISTS", "The row was not added because an existing row has the same primary key"),
    CodeEntry::described(0x8024_800F, "WU_E_DS_STOREFILELOCKED", "The data store could not be initialized because it was locked by another process"),
    CodeEntry::described(0x8024_8010, "WU_E_DS_CANNOTREGISTER", "The data store is not allowed to be registered with COM in the current process"),
    CodeEntry::described(0x8024_8011, "WU_E_DS_UNABLETOSTART", "Could not create a data store object in another process"),
    CodeEntry::described(0x8024_8013, "WU_E_DS_DUPLICATEUPDATEID", "The server sent the same update to the client with two different revision IDs"),
    CodeEntry::described(0x8024_8014, "WU_E_DS_UNKNOWNSERVICE", "An operation did not complete because the service is not in the data store"),
    CodeEntry::described(0x8024_8015, "WU_E_DS_SERVICEEXPIRED", "An operation did not complete because the registration of the service has expired"),
    CodeEntry::described(0x8024_8016, "WU_E_DS_DECLINENOTALLOWED", "A request to hide an update was declined because it is a mandatory update or because it was deployed with a deadline"),
    CodeEntry::described(0x8024_8017, "WU_E_DS_TABLESESSIONMISMATCH", "A table was not closed because it is not associated with the session"),
    CodeEntry::described(0x8024_8018, "WU_E_DS_SESSIONLOCKMISMATCH", "A table was not closed because it is not associated with the session"),
    CodeEntry::described(0x8024_8019, "WU_E_DS_NEEDWINDOWSSERVICE", "A request to remove the Windows Update service or to unregister it with Automatic Updates was declined because it is a built-in service and/or Automatic Updates cannot fall back to another service"),
    CodeEntry::described(0x8024_801A, "WU_E_DS_INVALIDOPERATION", "A request was declined because the operation is not allowed"),
    CodeEntry::described(0x8024_801B, "WU_E_DS_SCHEMAMISMATCH", "The schema of the current data store and the schema of a table in a backup XML document do not match"),
    CodeEntry::described(0x8024_801C, "WU_E_DS_RESETREQUIRED", "The data store requires a session reset; release the session and retry with a new session"),
    CodeEntry::described(0x8024_801D, "WU_E_DS_IMPERSONATED", "A data store operation did not complete because it was requested with an impersonated identity"),
    CodeEntry::described(0x8024_801E, "WU_E_DS_DATANOTAVAILABLE", "An operation against update metadata did not complete because the data was never received from server"),
    CodeEntry::described(0x8024_801F, "WU_E_DS_DATANOTLOADED", "An operation against update metadata did not complete because the data was available but not loaded from datastore"),
    CodeEntry::described(0x8024_8020, "WU_E_DS_NODATA_NOSUCHREVISION", "A data store operation did not complete because no such update revision is known"),
    CodeEntry::described(0x8024_8021, "WU_E_DS_NODATA_NOSUCHUPDATE", "A data store operation did not complete because no such update is known"),
    CodeEntry::described(0x8024_8022, "WU_E_DS_NODATA_EULA", "A data store operation did not complete because an update's EULA information is missing"),
    CodeEntry::described(0x8024_8023, "WU_E_DS_NODATA_SERVICE", "A data store operation did not complete because a service's information is missing"),
    CodeEntry::described(0x8024_8024, "WU_E_DS_NODATA_COOKIE", "A data store operation did not complete because a service's synchronization information is missing"),
    CodeEntry::described(0x8024_8025, "WU_E_DS_NODATA_TIMER", "A data store operation did not complete because a timer's information is missing"),
    CodeEntry::described(0x8024_8026, "WU_E_DS_NODATA_CCR", "A data store operation did not complete because a download's information is missing"),
    CodeEntry::described(0x8024_8027, "WU_E_DS_NODATA_FILE", "A data store operation did not complete because a file's information is missing"),
    CodeEntry::described(0x8024_8028, "WU_E_DS_NODATA_DOWNLOADJOB", "A data store operation did not complete because a download job's information is missing"),
    CodeEntry::described(0x8024_8029, "WU_E_DS_NODATA_TMI", "A data store operation did not complete because a service's timestamp information is missing"),
    CodeEntry::described(0x8024_8FFF, "WU_E_DS_UNEXPECTED", "A data store error not covered by another WU_E_DS_* code"),
    CodeEntry::described(0x8024_9001, "WU_E_INVENTORY_PARSEFAILED", "Parsing of the rule file failed"),
    CodeEntry::described(0x8024_9002, "WU_E_INVENTORY_GET_INVENTORY_TYPE_FAILED", "Failed to get the requested inventory type from the server"),
    CodeEntry::described(0x8024_9003, "WU_E_INVENTORY_RESULT_UPLOAD_FAILED", "Failed to upload inventory result to the server"),
    CodeEntry::described(0x8024_9004, "WU_E_INVENTORY_UNEXPECTED", "There was an inventory error not covered by another error code"),
    CodeEntry::described(0x8024_9005, "WU_E_INVENTORY_WMI_ERROR", "A WMI error occurred when enumerating the instances for a particular class"),
    CodeEntry::described(0x8024_A000, "WU_E_AU_NOSERVICE", "Automatic Updates was unable to service incoming requests"),
    CodeEntry::described(0x8024_A002, "WU_E_AU_NONLEGACYSERVER", "The old version of the Automatic Updates client has stopped because the WSUS server has been upgraded"),
    CodeEntry::described(0x8024_A003, "WU_E_AU_LEGACYCLIENTDISABLED", "The old version of the Automatic Updates client was disabled"),
    CodeEntry::described(0x8024_A004, "WU_E_AU_PAUSED", "Automatic Updates was unable to process incoming requests because it was paused"),
    CodeEntry::described(0x8024_A005, "WU_E_AU_NO_REGISTERED_SERVICE", "No unmanaged service is registered with AU"),
    CodeEntry::described(0x8024_A006, "WU_E_AU_DETECT_SVCID_MISMATCH", "The default service registered with AU changed during the search"),
    CodeEntry::described(0x8024_A007, "WU_E_REBOOT_IN_PROGRESS", "A reboot is in progress"),
    CodeEntry::described(0x8024_A008, "WU_E_AU_OOBE_IN_PROGRESS", "Automatic Updates can't process incoming requests while Windows Welcome is running"),
    CodeEntry::described(0x8024_AFFF, "WU_E_AU_UNEXPECTED", "An Automatic Updates error not covered by another WU_E_AU * code"),
    CodeEntry::described(0x8024_2000, "WU_E_UH_REMOTEUNAVAILABLE", "A request for a remote update handler could not be completed because no remote process is available"),
    CodeEntry::described(0x8024_2001, "WU_E_UH_LOCALONLY", "A request for a remote update handler could not be completed because the handler is local only"),
    CodeEntry::described(0x8024_2002, "WU_E_UH_UNKNOWNHANDLER", "A request for an update handler could not be completed because the handler could not be recognized"),
    CodeEntry::described(0x8024_2003, "WU_E_UH_REMOTEALREADYACTIVE", "A remote update handler could not be created because one already exists"),
    CodeEntry::described(0x8024_2004, "WU_E_UH_DOESNOTSUPPORTACTION", "A request for the handler to install (uninstall) an update could not be completed because the update does not support install (uninstall)"),
    CodeEntry::described(0x8024_2005, "WU_E_UH_WRONGHANDLER", "An operation did not complete because the wrong handler was specified"),
    CodeEntry::described(0x8024_2006, "WU_E_UH_INVALIDMETADATA", "A handler operation could not be completed because the update contains invalid metadata"),
    CodeEntry::described(0x8024_2007, "WU_E_UH_INSTALLERHUNG", "An operation could not be completed because the installer exceeded the time limit"),
    CodeEntry::described(0x8024_2008, "WU_E_UH_OPERATIONCANCELLED", "An operation being done by the update handler was cancelled"),
    CodeEntry::described(0x8024_2009, "WU_E_UH_BADHANDLERXML", "An operation could not be completed because the handler-specific metadata is invalid"),
    CodeEntry::described(0x8024_200A, "WU_E_UH_CANREQUIREINPUT", "A request to the handler to install an update could not be completed because the update requires user input"),
    CodeEntry::described(0x8024_200B, "WU_E_UH_INSTALLERFAILURE", "The installer failed to install (uninstall) one or more updates"),
    CodeEntry::described(0x8024_200C, "WU_E_UH_FALLBACKTOSELFCONTAINED", "The update handler should download self-contained content rather than delta-compressed content for the update"),
    CodeEntry::described(0x8024_200D, "WU_E_UH_NEEDANOTHERDOWNLOAD", "The update handler did not install the update because it needs to be downloaded again"),
    CodeEntry::described(0x8024_200E, "WU_E_UH_NOTIFYFAILURE", "The update handler failed to send notification of the status of the install (uninstall) operation"),
    CodeEntry::described(0x8024_200F, "WU_E_UH_INCONSISTENT_FILE_NAMES", "The file names contained in the update metadata and in the update package are inconsistent"),
    CodeEntry::described(0x8024_2010, "WU_E_UH_FALLBACKERROR", "The update handler failed to fall back to the self-contained content"),
    CodeEntry::described(0x8024_2011, "WU_E_UH_TOOMANYDOWNLOADREQUESTS", "The update handler has exceeded the maximum number of download requests"),
    CodeEntry::described(0x8024_2012, "WU_E_UH_UNEXPECTEDCBSRESPONSE", "The update handler has received an unexpected response from CBS"),
    CodeEntry::described(0x8024_2013, "WU_E_UH_BADCBSPACKAGEID", "The update metadata contains an invalid CBS package identifier"),
    CodeEntry::described(0x8024_2014, "WU_E_UH_POSTREBOOTSTILLPENDING", "The post-reboot operation for the update is still in progress"),
    CodeEntry::described(0x8024_2015, "WU_E_UH_POSTREBOOTRESULTUNKNOWN", "The result of the post-reboot operation for the update could not be determined"),
    CodeEntry::described(0x8024_2016, "WU_E_UH_POSTREBOOTUNEXPECTEDSTATE", "The state of the update after its post-reboot operation has completed is unexpected"),
    CodeEntry::described(0x8024_2017, "WU_E_UH_NEW_SERVICING_STACK_REQUIRED", "The OS servicing stack must be updated before this update is downloaded or installed"),
    CodeEntry::described(0x8024_2018, "WU_E_UH_CALLED_BACK_FAILURE", "A callback installer called back with an error"),
    CodeEntry::described(0x8024_2019, "WU_E_UH_CUSTOMINSTALLER_INVALID_SIGNATURE", "The custom installer signature did not match the signature required by the update"),
    CodeEntry::described(0x8024_201A, "WU_E_UH_UNSUPPORTED_INSTALLCONTEXT", "The installer does not support the installation configuration"),
    CodeEntry::described(0x8024_201B, "WU_E_UH_INVALID_TARGETSESSION", "The targeted session for install is invalid"),
    CodeEntry::described(0x8024_201C, "WU_E_UH_DECRYPTFAILURE", "The handler failed to decrypt the update files"),
    CodeEntry::described(0x8024_201D, "WU_E_UH_HANDLER_DISABLEDUNTILREBOOT", "The update handler is disabled until the system reboots"),
    CodeEntry::described(0x8024_201E, "WU_E_UH_APPX_NOT_PRESENT", "The AppX infrastructure is not present on the system"),
    CodeEntry::described(0x8024_201F, "WU_E_UH_NOTREADYTOCOMMIT", "The update cannot be committed because it has not been previously installed or staged"),
    CodeEntry::described(0x8024_2020, "WU_E_UH_APPX_INVALID_PACKAGE_VOLUME", "The specified volume is not a valid AppX package volume"),
    CodeEntry::described(0x8024_2021, "WU_E_UH_APPX_DEFAULT_PACKAGE_VOLUME_UNAVAILABLE", "The configured default storage volume is unavailable"),
    CodeEntry::described(0x8024_2022, "WU_E_UH_APPX_INSTALLED_PACKAGE_VOLUME_UNAVAILABLE", "The volume on which the application is installed is unavailable"),
    CodeEntry::described(0x8024_2023, "WU_E_UH_APPX_PACKAGE_FAMILY_NOT_FOUND", "The specified package family is not present on the system"),
    CodeEntry::described(0x8024_2024, "WU_E_UH_APPX_SYSTEM_VOLUME_NOT_FOUND", "Unable to find a package volume marked as system"),
    CodeEntry::described(0x8024_2025, "WU_E_UH_UA_SESSION_INFO_VERSION_NOT_SUPPORTED", "UA does not support the version of OptionalSessionInfo"),
    CodeEntry::described(0x8024_2026, "WU_E_UH_RESERVICING_REQUIRED_BASELINE", "This operation cannot be completed. You must install the baseline update(s) before you can install this update"),
    CodeEntry::described(0x8024_2FFF, "WU_E_UH_UNEXPECTED", "An update handler error not covered by another WU_E_UH_* code"),
    CodeEntry::described(0x8024_6001, "WU_E_DM_URLNOTAVAILABLE", "A download manager operation could not be completed because the requested file does not have a URL"),
    CodeEntry::described(0x8024_6002, "WU_E_DM_INCORRECTFILEHASH", "A download manager operation could not be completed because the file digest was not recognized"),
    CodeEntry::described(0x8024_6003, "WU_E_DM_UNKNOWNALGORITHM", "A download manager operation could not be completed because the file metadata requested an unrecognized hash algorithm"),
    CodeEntry::described(0x8024_6004, "WU_E_DM_NEEDDOWNLOADREQUEST", "An operation could not be completed because a download request is required from the download handler"),
    CodeEntry::described(0x8024_6005, "WU_E_DM_NONETWORK", "A download manager operation could not be completed because the network connection was unavailable"),
    CodeEntry::described(0x8024_6006, "WU_E_DM_WRONGBITSVERSION", "A download manager operation could not be completed because the version of Background Intelligent Transfer Service (BITS) is incompatible"),
    CodeEntry::described(0x8024_6007, "WU_E_DM_NOTDOWNLOADED", "The update has not been downloaded"),
    CodeEntry::described(0x8024_6008, "WU_E_DM_FAILTOCONNECTTOBITS", "A download manager operation failed because the download manager was unable to connect the Background Intelligent Transfer Service (BITS)"),
    CodeEntry::described(0x8024_6009, "WU_E_DM_BITSTRANSFERERROR", "A download manager operation failed because there was an unspecified Background Intelligent Transfer Service (BITS) transfer error"),
    CodeEntry::described(0x8024_600A, "WU_E_DM_DOWNLOADLOCATIONCHANGED", "A download must be restarted because the location of the source of the download has changed"),
    CodeEntry::described(0x8024_600B, "WU_E_DM_CONTENTCHANGED", "A download must be restarted because the update content changed in a new revision"),
    CodeEntry::described(0x8024_600C, "WU_E_DM_DOWNLOADLIMITEDBYUPDATESIZE", "A download failed because the current network limits downloads by update size for the update service"),
    CodeEntry::described(0x8024_600E, "WU_E_DM_UNAUTHORIZED", "The download failed because the client was denied authorization to download the content"),
    CodeEntry::described(0x8024_600F, "WU_E_DM_BG_ERROR_TOKEN_REQUIRED", "The download failed because the user token associated with the BITS job no longer exists"),
    CodeEntry::described(0x8024_6010, "WU_E_DM_DOWNLOADSANDBOXNOTFOUND", "The sandbox directory for the downloaded update was not found"),
    CodeEntry::described(0x8024_6011, "WU_E_DM_DOWNLOADFILEPATHUNKNOWN", "The downloaded update has an unknown file path"),
    CodeEntry::described(0x8024_6012, "WU_E_DM_DOWNLOADFILEMISSING", "One or more of the files for the downloaded update is missing"),
    CodeEntry::described(0x8024_6013, "WU_E_DM_UPDATEREMOVED", "An attempt was made to access a downloaded update that has already been removed"),
    CodeEntry::described(0x8024_6014, "WU_E_DM_READRANGEFAILED", "Windows Update couldn't find a needed portion of a downloaded update's file"),
    CodeEntry::described(0x8024_6016, "WU_E_DM_UNAUTHORIZED_NO_USER", "The download failed because the client was denied authorization to download the content due to no user logged on"),
    CodeEntry::described(0x8024_6017, "WU_E_DM_UNAUTHORIZED_LOCAL_USER", "The download failed because the local user was denied authorization to download the content"),
    CodeEntry::described(0x8024_6018, "WU_E_DM_UNAUTHORIZED_DOMAIN_USER", "The download failed because the domain user was denied authorization to download the content"),
    CodeEntry::described(0x8024_6019, "WU_E_DM_UNAUTHORIZED_MSA_USER", "The download failed because the MSA account associated with the user was denied authorization to download the content"),
    CodeEntry::described(0x8024_601A, "WU_E_DM_FALLINGBACKTOBITS", "The download will be continued by falling back to BITS to download the content"),
    CodeEntry::described(0x8024_601B, "WU_E_DM_DOWNLOAD_VOLUME_CONFLICT", "Another caller has requested download to a different volume"),
    CodeEntry::described(0x8024_601C, "WU_E_DM_SANDBOX_HASH_MISMATCH", "The hash of the update's sandbox does not match the expected value"),
    CodeEntry::described(0x8024_601D, "WU_E_DM_HARDRESERVEID_CONFLICT", "The hard reserve id specified conflicts with an id from another caller"),
    CodeEntry::described(0x8024_601E, "WU_E_DM_DOSVC_REQUIRED", "The update has to be downloaded via DO"),
    CodeEntry::described(0x8024_601F, "WU_E_DM_DOWNLOADTYPE_CONFLICT", "Windows Update only supports one download type per update at one time. The download failure is by design here since the same update with different download type is operating. Please try again later"),
    CodeEntry::described(0x8024_6FFF, "WU_E_DM_UNEXPECTED", "There was a download manager error not covered by another WU_E_DM_* error code"),
    CodeEntry::described(0x8024_D001, "WU_E_SETUP_INVALID_INFDATA", "Windows Update Agent could not be updated because an INF file contains invalid information"),
    CodeEntry::described(0x8024_D002, "WU_E_SETUP_INVALID_IDENTDATA", "Windows Update Agent could not be updated because the wuident.cab file contains invalid information"),
    CodeEntry::described(0x8024_D003, "WU_E_SETUP_ALREADY_INITIALIZED", "Windows Update Agent could not be updated because of an internal error that caused setup initialization to be performed twice"),
    CodeEntry::described(0x8024_D004, "WU_E_SETUP_NOT_INITIALIZED", "Windows Update Agent could not be updated because setup initialization never completed successfully"),
    CodeEntry::described(0x8024_D005, "WU_E_SETUP_SOURCE_VERSION_MISMATCH", "Windows Update Agent could not be updated because the versions specified in the INF do not match the actual source file versions"),
    CodeEntry::described(0x8024_D006, "WU_E_SETUP_TARGET_VERSION_GREATER", "Windows Update Agent could not be updated because a WUA file on the target system is newer than the corresponding source file"),
    CodeEntry::described(0x8024_D007, "WU_E_SETUP_REGISTRATION_FAILED", "Windows Update Agent could not be updated because regsvr32.exe returned an error"),
    CodeEntry::described(0x8024_D008, "WU_E_SELFUPDATE_SKIP_ON_FAILURE", "An update to the Windows Update Agent was skipped because previous attempts to update have failed"),
    CodeEntry::described(0x8024_D009, "WU_E_SETUP_SKIP_UPDATE", "An update to the Windows Update Agent was skipped due to a directive in the wuident.cab file"),
    CodeEntry::described(0x8024_D00A, "WU_E_SETUP_UNSUPPORTED_CONFIGURATION", "Windows Update Agent could not be updated because the current system configuration is not supported"),
    CodeEntry::described(0x8024_D00B, "WU_E_SETUP_BLOCKED_CONFIGURATION", "Windows Update Agent could not be updated because the system is configured to block the update"),
    CodeEntry::described(0x8024_D00C, "WU_E_SETUP_REBOOT_TO_FIX", "Windows Update Agent could not be updated because a restart of the system is required"),
    CodeEntry::described(0x8024_D00D, "WU_E_SETUP_ALREADYRUNNING", "Windows Update Agent setup is already running"),
    CodeEntry::described(0x8024_D00E, "WU_E_SETUP_REBOOTREQUIRED", "Windows Update Agent setup package requires a reboot to complete installation"),
    CodeEntry::described(0x8024_D00F, "WU_E_SETUP_HANDLER_EXEC_FAILURE", "Windows Update Agent could not be updated because the setup handler failed during execution"),
    CodeEntry::described(0x8024_D010, "WU_E_SETUP_INVALID_REGISTRY_DATA", "Windows Update Agent could not be updated because the registry contains invalid information"),
    CodeEntry::described(0x8024_D011, "WU_E_SELFUPDATE_REQUIRED", "Windows Update Agent must be updated before search can continue"),
    CodeEntry::described(0x8024_D012, "WU_E_SELFUPDATE_REQUIRED_ADMIN", "Windows Update Agent must be updated before search can continue.  An administrator is required to perform the operation"),
    CodeEntry::described(0x8024_D013, "WU_E_SETUP_WRONG_SERVER_VERSION", "Windows Update Agent could not be updated because the server does not contain update information for this version"),
    CodeEntry::described(0x8024_D014, "WU_E_SETUP_DEFERRABLE_REBOOT_PENDING", "Windows Update Agent is successfully updated, but a reboot is required to complete the setup"),
    CodeEntry::described(0x8024_D015, "WU_E_SETUP_NON_DEFERRABLE_REBOOT_PENDING", "Windows Update Agent is successfully updated, but a reboot is required to complete the setup"),
    CodeEntry::described(0x8024_D016, "WU_E_SETUP_FAIL", "Windows Update Agent could not be updated because of an unknown error"),
    CodeEntry::described(0x8024_DFFF, "WU_E_SETUP_UNEXPECTED", "Windows Update Agent could not be updated because of an error not covered by another WU_E_SETUP_* error code"),
    CodeEntry::described(0x8024_E001, "WU_E_EE_UNKNOWN_EXPRESSION", "An expression evaluator operation could not be completed because an expression was unrecognized"),
    CodeEntry::described(0x8024_E002, "WU_E_EE_INVALID_EXPRESSION", "An expression evaluator operation could not be completed because an expression was invalid"),
    CodeEntry::described(0x8024_E003, "WU_E_EE_MISSING_METADATA", "An expression evaluator operation could not be completed because an expression contains an incorrect number of metadata nodes"),
    CodeEntry::described(0x8024_E004, "WU_E_EE_INVALID_VERSION", "An expression evaluator operation could not be completed because the version of the serialized expression data is invalid"),
    CodeEntry::described(0x8024_E005, "WU_E_EE_NOT_INITIALIZED", "The expression evaluator could not be initialized"),
    CodeEntry::described(0x8024_E006, "WU_E_EE_INVALID_ATTRIBUTEDATA", "An expression evaluator operation could not be completed because there was an invalid attribute"),
    CodeEntry::described(0x8024_E007, "WU_E_EE_CLUSTER_ERROR", "An expression evaluator operation could not be completed because the cluster state of the computer could not be determined"),
    CodeEntry::described(0x8024_EFFF, "WU_E_EE_UNEXPECTED", "There was an expression evaluator error not covered by another WU_E_EE_* error code"),
    CodeEntry::described(0x8024_3001, "WU_E_INSTALLATION_RESULTS_UNKNOWN_VERSION", "The results of download and installation could not be read from the registry due to an unrecognized data format version"),
    CodeEntry::described(0x8024_3002, "WU_E_INSTALLATION_RESULTS_INVALID_DATA", "The results of download and installation could not be read from the registry due to an invalid data format"),
    CodeEntry::described(0x8024_3003, "WU_E_INSTALLATION_RESULTS_NOT_FOUND", "The results of download and installation are not available; the operation may have failed to start"),
    CodeEntry::described(0x8024_3004, "WU_E_TRAYICON_FAILURE", "A failure occurred when trying to create an icon in the taskbar notification area"),
    CodeEntry::described(0x8024_3FFD, "WU_E_NON_UI_MODE", "Unable to show UI when in non-UI mode; WU client UI modules may not be installed"),
    CodeEntry::described(0x8024_3FFE, "WU_E_WUCLTUI_UNSUPPORTED_VERSION", "Unsupported version of WU client UI exported functions"),
    CodeEntry::described(0x8024_3FFF, "WU_E_AUCLIENT_UNEXPECTED", "There was a user interface error not covered by another WU_E_AUCLIENT_* error code"),
    CodeEntry::described(0x8024_F001, "WU_E_REPORTER_EVENTCACHECORRUPT", "The event cache file was defective"),
    CodeEntry::described(0x8024_F002, "WU_E_REPORTER_EVENTNAMESPACEPARSEFAILED", "The XML in the event namespace descriptor could not be parsed"),
    CodeEntry::described(0x8024_F003, "WU_E_INVALID_EVENT", "The XML in the event namespace descriptor could not be parsed"),
    CodeEntry::described(0x8024_F004, "WU_E_SERVER_BUSY", "The server rejected an event because the server was too busy"),
    CodeEntry::described(0x8024_F005, "WU_E_CALLBACK_COOKIE_NOT_FOUND", "The specified callback cookie is not found"),
    CodeEntry::described(0x8024_FFFF, "WU_E_REPORTER_UNEXPECTED", "There was a reporter error not covered by another error code"),
    CodeEntry::described(0x8024_7001, "WU_E_OL_INVALID_SCANFILE", "An operation could not be completed because the scan package was invalid"),
    CodeEntry::described(0x8024_7002, "WU_E_OL_NEWCLIENT_REQUIRED", "An operation could not be completed because the scan package requires a greater version of the Windows Update Agent"),
    CodeEntry::described(0x8024_7003, "WU_E_INVALID_EVENT_PAYLOAD", "An invalid event payload was specified"),
    CodeEntry::described(0x8024_7004, "WU_E_INVALID_EVENT_PAYLOADSIZE", "The size of the event payload submitted is invalid"),
    CodeEntry::described(0x8024_7005, "WU_E_SERVICE_NOT_REGISTERED", "The service is not registered"),
    CodeEntry::described(0x8024_7FFF, "WU_E_OL_UNEXPECTED", "Search using the scan package failed"),
    CodeEntry::described(0x8024_7100, "WU_E_METADATA_NOOP", "No operation was required by update metadata verification"),
    CodeEntry::described(0x8024_7101, "WU_E_METADATA_CONFIG_INVALID_BINARY_ENCODING", "The binary encoding of metadata config data was invalid"),
    CodeEntry::described(0x8024_7102, "WU_E_METADATA_FETCH_CONFIG", "Unable to fetch required configuration for metadata signature verification"),
    CodeEntry::described(0x8024_7104, "WU_E_METADATA_INVALID_PARAMETER", "A metadata verification operation failed due to an invalid parameter"),
    CodeEntry::described(0x8024_7105, "WU_E_METADATA_UNEXPECTED", "A metadata verification operation failed due to reasons not covered by another error code"),
    CodeEntry::described(0x8024_7106, "WU_E_METADATA_NO_VERIFICATION_DATA", "None of the update metadata had verification data, which may be disabled on the update server"),
    CodeEntry::described(0x8024_7107, "WU_E_METADATA_BAD_FRAGMENTSIGNING_CONFIG", "The fragment signing configuration used for verifying update metadata signatures was bad"),
    CodeEntry::described(0x8024_7108, "WU_E_METADATA_FAILURE_PROCESSING_FRAGMENTSIGNING_CONFIG", "There was an unexpected operational failure while parsing fragment signing configuration"),
    CodeEntry::described(0x8024_7120, "WU_E_METADATA_XML_MISSING", "Required xml data was missing from configuration"),
    CodeEntry::described(0x8024_7121, "WU_E_METADATA_XML_FRAGMENTSIGNING_MISSING", "Required fragmentsigning data was missing from xml configuration"),
    CodeEntry::described(0x8024_7122, "WU_E_METADATA_XML_MODE_MISSING", "Required mode data was missing from xml configuration"),
    CodeEntry::described(0x8024_7123, "WU_E_METADATA_XML_MODE_INVALID", "An invalid metadata enforcement mode was detected"),
    CodeEntry::described(0x8024_7124, "WU_E_METADATA_XML_VALIDITY_INVALID", "An invalid timestamp validity window configuration was detected"),
    CodeEntry::described(0x8024_7125, "WU_E_METADATA_XML_LEAFCERT_MISSING", "Required leaf certificate data was missing from xml configuration"),
    CodeEntry::described(0x8024_7126, "WU_E_METADATA_XML_INTERMEDIATECERT_MISSING", "Required intermediate certificate data was missing from xml configuration"),
    CodeEntry::described(0x8024_7127, "WU_E_METADATA_XML_LEAFCERT_ID_MISSING", "Required leaf certificate id attribute was missing from xml configuration"),
    CodeEntry::described(0x8024_7128, "WU_E_METADATA_XML_BASE64CERDATA_MISSING", "Required certificate base64CerData attribute was missing from xml configuration"),
    CodeEntry::described(0x8024_7140, "WU_E_METADATA_BAD_SIGNATURE", "The metadata for an update was found to have a bad or invalid digital signature"),
    CodeEntry::described(0x8024_7141, "WU_E_METADATA_UNSUPPORTED_HASH_ALG", "An unsupported hash algorithm for metadata verification was specified"),
    CodeEntry::described(0x8024_7142, "WU_E_METADATA_SIGNATURE_VERIFY_FAILED", "An error occurred during an update's metadata signature verification"),
    CodeEntry::described(0x8024_7150, "WU_E_METADATATRUST_CERTIFICATECHAIN_VERIFICATION", "An failure occurred while verifying trust for metadata signing certificate chains"),
    CodeEntry::described(0x8024_7151, "WU_E_METADATATRUST_UNTRUSTED_CERTIFICATECHAIN", "A metadata signing certificate had an untrusted certificate chain"),
    CodeEntry::described(0x8024_7160, "WU_E_METADATA_TIMESTAMP_TOKEN_MISSING", "An expected metadata timestamp token was missing"),
    CodeEntry::described(0x8024_7161, "WU_E_METADATA_TIMESTAMP_TOKEN_VERIFICATION_FAILED", "A metadata Timestamp token failed verification"),
    CodeEntry::described(0x8024_7162, "WU_E_METADATA_TIMESTAMP_TOKEN_UNTRUSTED", "A metadata timestamp token signer certificate chain was untrusted"),
    CodeEntry::described(0x8024_7163, "WU_E_METADATA_TIMESTAMP_TOKEN_VALIDITY_WINDOW", "A metadata signature timestamp token was no longer within the validity window"),
    CodeEntry::described(0x8024_7164, "WU_E_METADATA_TIMESTAMP_TOKEN_SIGNATURE", "A metadata timestamp token failed signature validation"),
    CodeEntry::described(0x8024_7165, "WU_E_METADATA_TIMESTAMP_TOKEN_CERTCHAIN", "A metadata timestamp token certificate failed certificate chain verification"),
    CodeEntry::described(0x8024_7166, "WU_E_METADATA_TIMESTAMP_TOKEN_REFRESHONLINE", "A failure occurred when refreshing a missing timestamp token from the network"),
    CodeEntry::described(0x8024_7167, "WU_E_METADATA_TIMESTAMP_TOKEN_ALL_BAD", "All update metadata verification timestamp tokens from the timestamp token cache are invalid"),
    CodeEntry::described(0x8024_7168, "WU_E_METADATA_TIMESTAMP_TOKEN_NODATA", "No update metadata verification timestamp tokens exist in the timestamp token cache"),
    CodeEntry::described(0x8024_7169, "WU_E_METADATA_TIMESTAMP_TOKEN_CACHELOOKUP", "An error occurred during cache lookup of update metadata verification timestamp token"),
    CodeEntry::described(0x8024_717E, "WU_E_METADATA_TIMESTAMP_TOKEN_VALIDITYWINDOW_UNEXPECTED", "An metadata timestamp token validity window failed unexpectedly due to reasons not covered by another error code"),
    CodeEntry::described(0x8024_717F, "WU_E_METADATA_TIMESTAMP_TOKEN_UNEXPECTED", "An metadata timestamp token verification operation failed due to reasons not covered by another error code"),
    CodeEntry::described(0x8024_7180, "WU_E_METADATA_CERT_MISSING", "An expected metadata signing certificate was missing"),
    CodeEntry::described(0x8024_7181, "WU_E_METADATA_LEAFCERT_BAD_TRANSPORT_ENCODING", "The transport encoding of a metadata signing leaf certificate was malformed"),
    CodeEntry::described(0x8024_7182, "WU_E_METADATA_INTCERT_BAD_TRANSPORT_ENCODING", "The transport encoding of a metadata signing intermediate certificate was malformed"),
    CodeEntry::described(0x8024_7183, "WU_E_METADATA_CERT_UNTRUSTED", "A metadata certificate chain was untrusted"),
    CodeEntry::described(0x8024_B001, "WU_E_WUTASK_INPROGRESS", "The task is currently in progress"),
    CodeEntry::described(0x8024_B002, "WU_E_WUTASK_STATUS_DISABLED", "The operation cannot be completed since the task status is currently disabled"),
    CodeEntry::described(0x8024_B003, "WU_E_WUTASK_NOT_STARTED", "The operation cannot be completed since the task is not yet started"),
    CodeEntry::described(0x8024_B004, "WU_E_WUTASK_RETRY", "The task was stopped and needs to be run again to complete"),
    CodeEntry::described(0x8024_B005, "WU_E_WUTASK_CANCELINSTALL_DISALLOWED", "Cannot cancel a non-scheduled install"),
    CodeEntry::described(0x8024_B101, "WU_E_UNKNOWN_HARDWARECAPABILITY", "Hardware capability meta data was not found after a sync with the service"),
    CodeEntry::described(0x8024_B102, "WU_E_BAD_XML_HARDWARECAPABILITY", "Hardware capability meta data was malformed and/or failed to parse"),
    CodeEntry::described(0x8024_B103, "WU_E_WMI_NOT_SUPPORTED", "Unable to complete action due to WMI dependency, which isn't supported on this platform"),
    CodeEntry::described(0x8024_B104, "WU_E_UPDATE_MERGE_NOT_ALLOWED", "Merging of the update is not allowed"),
    CodeEntry::described(0x8024_B105, "WU_E_SKIPPED_UPDATE_INSTALLATION", "Installing merged updates only. So skipping non mergeable updates"),
    CodeEntry::described(0x8024_B201, "WU_E_SLS_INVALID_REVISION", "SLS response returned invalid revision number"),
    CodeEntry::described(0x8024_B301, "WU_E_FILETRUST_DUALSIGNATURE_RSA", "File signature validation fails to find valid RSA signature on infrastructure payload"),
    CodeEntry::described(0x8024_B302, "WU_E_FILETRUST_DUALSIGNATURE_ECC", "File signature validation fails to find valid ECC signature on infrastructure payload"),
    CodeEntry::described(0x8024_B303, "WU_E_TRUST_SUBJECT_NOT_TRUSTED", "The subject is not trusted by WU for the specified action"),
    CodeEntry::described(0x8024_B304, "WU_E_TRUST_PROVIDER_UNKNOWN", "Unknown trust provider for WU"),
];
