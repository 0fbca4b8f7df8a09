//! Stop codes raised by the kernel when it halts the machine (bug checks).

use super::CodeEntry;

pub static ENTRIES: &[CodeEntry] = &[
    CodeEntry::named(0x0000_0001, "APC_INDEX_MISMATCH"),
    CodeEntry::named(0x0000_0002, "DEVICE_QUEUE_NOT_BUSY"),
    CodeEntry::named(0x0000_0003, "INVALID_AFFINITY_SET"),
    CodeEntry::named(0x0000_0004, "INVALID_DATA_ACCESS_TRAP"),
    CodeEntry::named(0x0000_0005, "INVALID_PROCESS_ATTACH_ATTEMPT"),
    CodeEntry::named(0x0000_0006, "INVALID_PROCESS_DETACH_ATTEMPT"),
    CodeEntry::named(0x0000_0007, "INVALID_SOFTWARE_INTERRUPT"),
    CodeEntry::named(0x0000_0008, "IRQL_NOT_DISPATCH_LEVEL"),
    CodeEntry::named(0x0000_0009, "IRQL_NOT_GREATER_OR_EQUAL"),
    CodeEntry::named(0x0000_000A, "IRQL_NOT_LESS_OR_EQUAL"),
    CodeEntry::named(0x0000_000B, "NO_EXCEPTION_HANDLING_SUPPORT"),
    CodeEntry::named(0x0000_000C, "MAXIMUM_WAIT_OBJECTS_EXCEEDED"),
    CodeEntry::named(0x0000_000D, "MUTEX_LEVEL_NUMBER_VIOLATION"),
    CodeEntry::named(0x0000_000E, "NO_USER_MODE_CONTEXT"),
    CodeEntry::named(0x0000_000F, "SPIN_LOCK_ALREADY_OWNED"),
    CodeEntry::named(0x0000_0010, "SPIN_LOCK_NOT_OWNED"),
    CodeEntry::named(0x0000_0011, "THREAD_NOT_MUTEX_OWNER"),
    CodeEntry::named(0x0000_0012, "TRAP_CAUSE_UNKNOWN"),
    CodeEntry::named(0x0000_0013, "EMPTY_THREAD_REAPER_LIST"),
    CodeEntry::named(0x0000_0014, "CREATE_DELETE_LOCK_NOT_LOCKED"),
    CodeEntry::named(0x0000_0015, "LAST_CHANCE_CALLED_FROM_KMODE"),
    CodeEntry::named(0x0000_0016, "CID_HANDLE_CREATION"),
    CodeEntry::named(0x0000_0017, "CID_HANDLE_DELETION"),
    CodeEntry::named(0x0000_0018, "REFERENCE_BY_POINTER"),
    CodeEntry::named(0x0000_0019, "BAD_POOL_HEADER"),
    CodeEntry::named(0x0000_001A, "MEMORY_MANAGEMENT"),
    CodeEntry::named(0x0000_001B, "PFN_SHARE_COUNT"),
    CodeEntry::named(0x0000_001C, "PFN_REFERENCE_COUNT"),
    CodeEntry::named(0x0000_001D, "NO_SPIN_LOCK_AVAILABLE"),
    CodeEntry::named(0x0000_001E, "KMODE_EXCEPTION_NOT_HANDLED"),
    CodeEntry::named(0x0000_001F, "SHARED_RESOURCE_CONV_ERROR"),
    CodeEntry::named(0x0000_0020, "KERNEL_APC_PENDING_DURING_EXIT"),
    CodeEntry::named(0x0000_0021, "QUOTA_UNDERFLOW"),
    CodeEntry::named(0x0000_0022, "FILE_SYSTEM"),
    CodeEntry::named(0x0000_0023, "FAT_FILE_SYSTEM"),
    CodeEntry::named(0x0000_0024, "NTFS_FILE_SYSTEM"),
    CodeEntry::named(0x0000_0025, "NPFS_FILE_SYSTEM"),
    CodeEntry::named(0x0000_0026, "CDFS_FILE_SYSTEM"),
    CodeEntry::named(0x0000_0027, "RDR_FILE_SYSTEM"),
    CodeEntry::named(0x0000_0028, "CORRUPT_ACCESS_TOKEN"),
    CodeEntry::named(0x0000_0029, "SECURITY_SYSTEM"),
    CodeEntry::named(0x0000_002A, "INCONSISTENT_IRP"),
    CodeEntry::named(0x0000_002B, "PANIC_STACK_SWITCH"),
    CodeEntry::named(0x0000_002C, "PORT_DRIVER_INTERNAL"),
    CodeEntry::named(0x0000_002D, "SCSI_DISK_DRIVER_INTERNAL"),
    CodeEntry::named(0x0000_002E, "DATA_BUS_ERROR"),
    CodeEntry::named(0x0000_002F, "INSTRUCTION_BUS_ERROR"),
    CodeEntry::named(0x0000_0030, "SET_OF_INVALID_CONTEXT"),
    CodeEntry::named(0x0000_0031, "PHASE0_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0032, "PHASE1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0033, "UNEXPECTED_INITIALIZATION_CALL"),
    CodeEntry::named(0x0000_0034, "CACHE_MANAGER"),
    CodeEntry::named(0x0000_0035, "NO_MORE_IRP_STACK_LOCATIONS"),
    CodeEntry::named(0x0000_0036, "DEVICE_REFERENCE_COUNT_NOT_ZERO"),
    CodeEntry::named(0x0000_0037, "FLOPPY_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0038, "SERIAL_DRIVER_INTERNAL"),
    CodeEntry::named(0x0000_0039, "SYSTEM_EXIT_OWNED_MUTEX"),
    CodeEntry::named(0x0000_003A, "SYSTEM_UNWIND_PREVIOUS_USER"),
    CodeEntry::named(0x0000_003B, "SYSTEM_SERVICE_EXCEPTION"),
    CodeEntry::named(0x0000_003C, "INTERRUPT_UNWIND_ATTEMPTED"),
    CodeEntry::named(0x0000_003D, "INTERRUPT_EXCEPTION_NOT_HANDLED"),
    CodeEntry::named(0x0000_003E, "MULTIPROCESSOR_CONFIGURATION_NOT_SUPPORTED"),
    CodeEntry::named(0x0000_003F, "NO_MORE_SYSTEM_PTES"),
    CodeEntry::named(0x0000_0040, "TARGET_MDL_TOO_SMALL"),
    CodeEntry::named(0x0000_0041, "MUST_SUCCEED_POOL_EMPTY"),
    CodeEntry::named(0x0000_0042, "ATDISK_DRIVER_INTERNAL"),
    CodeEntry::named(0x0000_0043, "NO_SUCH_PARTITION"),
    CodeEntry::named(0x0000_0044, "MULTIPLE_IRP_COMPLETE_REQUESTS"),
    CodeEntry::named(0x0000_0045, "INSUFFICIENT_SYSTEM_MAP_REGS"),
    CodeEntry::named(0x0000_0046, "DEREF_UNKNOWN_LOGON_SESSION"),
    CodeEntry::named(0x0000_0047, "REF_UNKNOWN_LOGON_SESSION"),
    CodeEntry::named(0x0000_0048, "CANCEL_STATE_IN_COMPLETED_IRP"),
    CodeEntry::named(0x0000_0049, "PAGE_FAULT_WITH_INTERRUPTS_OFF"),
    CodeEntry::named(0x0000_004A, "IRQL_GT_ZERO_AT_SYSTEM_SERVICE"),
    CodeEntry::named(0x0000_004B, "STREAMS_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_004C, "FATAL_UNHANDLED_HARD_ERROR"),
    CodeEntry::named(0x0000_004D, "NO_PAGES_AVAILABLE"),
    CodeEntry::named(0x0000_004E, "PFN_LIST_CORRUPT"),
    CodeEntry::named(0x0000_004F, "NDIS_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0050, "PAGE_FAULT_IN_NONPAGED_AREA"),
    CodeEntry::named(0x0000_0051, "REGISTRY_ERROR"),
    CodeEntry::named(0x0000_0052, "MAILSLOT_FILE_SYSTEM"),
    CodeEntry::named(0x0000_0053, "NO_BOOT_DEVICE"),
    CodeEntry::named(0x0000_0054, "LM_SERVER_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0055, "DATA_COHERENCY_EXCEPTION"),
    CodeEntry::named(0x0000_0056, "INSTRUCTION_COHERENCY_EXCEPTION"),
    CodeEntry::named(0x0000_0057, "XNS_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0058, "FTDISK_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0059, "PINBALL_FILE_SYSTEM"),
    CodeEntry::named(0x0000_005A, "CRITICAL_SERVICE_FAILED"),
    CodeEntry::named(0x0000_005B, "SET_ENV_VAR_FAILED"),
    CodeEntry::named(0x0000_005C, "HAL_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_005D, "UNSUPPORTED_PROCESSOR"),
    CodeEntry::named(0x0000_005E, "OBJECT_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_005F, "SECURITY_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0060, "PROCESS_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0061, "HAL1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0062, "OBJECT1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0063, "SECURITY1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0064, "SYMBOLIC_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0065, "MEMORY1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0066, "CACHE_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0067, "CONFIG_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0068, "FILE_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0069, "IO1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_006A, "LPC_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_006B, "PROCESS1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_006C, "REFMON_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_006D, "SESSION1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_006E, "SESSION2_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_006F, "SESSION3_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0070, "SESSION4_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0071, "SESSION5_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0072, "ASSIGN_DRIVE_LETTERS_FAILED"),
    CodeEntry::named(0x0000_0073, "CONFIG_LIST_FAILED"),
    CodeEntry::named(0x0000_0074, "BAD_SYSTEM_CONFIG_INFO"),
    CodeEntry::named(0x0000_0075, "CANNOT_WRITE_CONFIGURATION"),
    CodeEntry::named(0x0000_0076, "PROCESS_HAS_LOCKED_PAGES"),
    CodeEntry::named(0x0000_0077, "KERNEL_STACK_INPAGE_ERROR"),
    CodeEntry::named(0x0000_0078, "PHASE0_EXCEPTION"),
    CodeEntry::named(0x0000_0079, "MISMATCHED_HAL"),
    CodeEntry::named(0x0000_007A, "KERNEL_DATA_INPAGE_ERROR"),
    CodeEntry::named(0x0000_007B, "INACCESSIBLE_BOOT_DEVICE"),
    CodeEntry::named(0x0000_007C, "BUGCODE_NDIS_DRIVER"),
    CodeEntry::named(0x0000_007D, "INSTALL_MORE_MEMORY"),
    CodeEntry::named(0x0000_007E, "SYSTEM_THREAD_EXCEPTION_NOT_HANDLED"),
    CodeEntry::named(0x0000_007F, "UNEXPECTED_KERNEL_MODE_TRAP"),
    CodeEntry::named(0x0000_0080, "NMI_HARDWARE_FAILURE"),
    CodeEntry::named(0x0000_0081, "SPIN_LOCK_INIT_FAILURE"),
    CodeEntry::named(0x0000_0082, "DFS_FILE_SYSTEM"),
    CodeEntry::named(0x0000_0085, "SETUP_FAILURE"),
    CodeEntry::named(0x0000_008B, "MBR_CHECKSUM_MISMATCH"),
    CodeEntry::named(0x0000_008E, "KERNEL_MODE_EXCEPTION_NOT_HANDLED"),
    CodeEntry::named(0x0000_008F, "PP0_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0090, "PP1_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0092, "UP_DRIVER_ON_MP_SYSTEM"),
    CodeEntry::named(0x0000_0093, "INVALID_KERNEL_HANDLE"),
    CodeEntry::named(0x0000_0094, "KERNEL_STACK_LOCKED_AT_EXIT"),
    CodeEntry::named(0x0000_0096, "INVALID_WORK_QUEUE_ITEM"),
    CodeEntry::named(0x0000_0097, "BOUND_IMAGE_UNSUPPORTED"),
    CodeEntry::named(0x0000_0098, "END_OF_NT_EVALUATION_PERIOD"),
    CodeEntry::named(0x0000_0099, "INVALID_REGION_OR_SEGMENT"),
    CodeEntry::named(0x0000_009A, "SYSTEM_LICENSE_VIOLATION"),
    CodeEntry::named(0x0000_009B, "UDFS_FILE_SYSTEM"),
    CodeEntry::named(0x0000_009C, "MACHINE_CHECK_EXCEPTION"),
    CodeEntry::named(0x0000_009E, "USER_MODE_HEALTH_MONITOR"),
    CodeEntry::named(0x0000_009F, "DRIVER_POWER_STATE_FAILURE"),
    CodeEntry::named(0x0000_00A0, "INTERNAL_POWER_ERROR"),
    CodeEntry::named(0x0000_00A1, "PCI_BUS_DRIVER_INTERNAL"),
    CodeEntry::named(0x0000_00A2, "MEMORY_IMAGE_CORRUPT"),
    CodeEntry::named(0x0000_00A3, "ACPI_DRIVER_INTERNAL"),
    CodeEntry::named(0x0000_00A4, "CNSS_FILE_SYSTEM_FILTER"),
    CodeEntry::named(0x0000_00A5, "ACPI_BIOS_ERROR"),
    CodeEntry::named(0x0000_00A7, "BAD_EXHANDLE"),
    CodeEntry::named(0x0000_00AC, "HAL_MEMORY_ALLOCATION"),
    CodeEntry::named(0x0000_00AD, "VIDEO_DRIVER_DEBUG_REPORT_REQUEST"),
    CodeEntry::named(0x0000_00B1, "BGI_DETECTED_VIOLATION"),
    CodeEntry::named(0x0000_00B4, "VIDEO_DRIVER_INIT_FAILURE"),
    CodeEntry::named(0x0000_00B8, "ATTEMPTED_SWITCH_FROM_DPC"),
    CodeEntry::named(0x0000_00B9, "CHIPSET_DETECTED_ERROR"),
    CodeEntry::named(0x0000_00BA, "SESSION_HAS_VALID_VIEWS_ON_EXIT"),
    CodeEntry::named(0x0000_00BB, "NETWORK_BOOT_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_00BC, "NETWORK_BOOT_DUPLICATE_ADDRESS"),
    CodeEntry::named(0x0000_00BD, "INVALID_HIBERNATED_STATE"),
    CodeEntry::named(0x0000_00BE, "ATTEMPTED_WRITE_TO_READONLY_MEMORY"),
    CodeEntry::named(0x0000_00BF, "MUTEX_ALREADY_OWNED"),
    CodeEntry::named(0x0000_00C1, "SPECIAL_POOL_DETECTED_MEMORY_CORRUPTION"),
    CodeEntry::named(0x0000_00C2, "BAD_POOL_CALLER"),
    CodeEntry::named(0x0000_00C4, "DRIVER_VERIFIER_DETECTED_VIOLATION"),
    CodeEntry::named(0x0000_00C5, "DRIVER_CORRUPTED_EXPOOL"),
    CodeEntry::named(0x0000_00C6, "DRIVER_CAUGHT_MODIFYING_FREED_POOL"),
    CodeEntry::named(0x0000_00C7, "TIMER_OR_DPC_INVALID"),
    CodeEntry::named(0x0000_00C8, "IRQL_UNEXPECTED_VALUE"),
    CodeEntry::named(0x0000_00C9, "DRIVER_VERIFIER_IOMANAGER_VIOLATION"),
    CodeEntry::named(0x0000_00CA, "PNP_DETECTED_FATAL_ERROR"),
    CodeEntry::named(0x0000_00CB, "DRIVER_LEFT_LOCKED_PAGES_IN_PROCESS"),
    CodeEntry::named(0x0000_00CC, "PAGE_FAULT_IN_FREED_SPECIAL_POOL"),
    CodeEntry::named(0x0000_00CD, "PAGE_FAULT_BEYOND_END_OF_ALLOCATION"),
    CodeEntry::named(0x0000_00CE, "DRIVER_UNLOADED_WITHOUT_CANCELLING_PENDING_OPERATIONS"),
    CodeEntry::named(0x0000_00CF, "TERMINAL_SERVER_DRIVER_MADE_INCORRECT_MEMORY_REFERENCE"),
    CodeEntry::named(0x0000_00D0, "DRIVER_CORRUPTED_MMPOOL"),
    CodeEntry::named(0x0000_00D1, "DRIVER_IRQL_NOT_LESS_OR_EQUAL"),
    CodeEntry::named(0x0000_00D2, "BUGCODE_ID_DRIVER"),
    CodeEntry::named(0x0000_00D3, "DRIVER_PORTION_MUST_BE_NONPAGED"),
    CodeEntry::named(0x0000_00D4, "SYSTEM_SCAN_AT_RAISED_IRQL_CAUGHT_IMPROPER_DRIVER_UNLOAD"),
    CodeEntry::named(0x0000_00D5, "DRIVER_PAGE_FAULT_IN_FREED_SPECIAL_POOL"),
    CodeEntry::named(0x0000_00D6, "DRIVER_PAGE_FAULT_BEYOND_END_OF_ALLOCATION"),
    CodeEntry::named(0x0000_00D7, "DRIVER_UNMAPPING_INVALID_VIEW"),
    CodeEntry::named(0x0000_00D8, "DRIVER_USED_EXCESSIVE_PTES"),
    CodeEntry::named(0x0000_00D9, "LOCKED_PAGES_TRACKER_CORRUPTION"),
    CodeEntry::named(0x0000_00DA, "SYSTEM_PTE_MISUSE"),
    CodeEntry::named(0x0000_00DB, "DRIVER_CORRUPTED_SYSPTES"),
    CodeEntry::named(0x0000_00DC, "DRIVER_INVALID_STACK_ACCESS"),
    CodeEntry::named(0x0000_00DE, "POOL_CORRUPTION_IN_FILE_AREA"),
    CodeEntry::named(0x0000_00DF, "IMPERSONATING_WORKER_THREAD"),
    CodeEntry::named(0x0000_00E0, "ACPI_BIOS_FATAL_ERROR"),
    CodeEntry::named(0x0000_00E1, "WORKER_THREAD_RETURNED_AT_BAD_IRQL"),
    CodeEntry::named(0x0000_00E2, "MANUALLY_INITIATED_CRASH"),
    CodeEntry::named(0x0000_00E3, "RESOURCE_NOT_OWNED"),
    CodeEntry::named(0x0000_00E4, "WORKER_INVALID"),
    CodeEntry::named(0x0000_00E6, "DRIVER_VERIFIER_DMA_VIOLATION"),
    CodeEntry::named(0x0000_00E7, "INVALID_FLOATING_POINT_STATE"),
    CodeEntry::named(0x0000_00E8, "INVALID_CANCEL_OF_FILE_OPEN"),
    CodeEntry::named(0x0000_00E9, "ACTIVE_EX_WORKER_THREAD_TERMINATION"),
    CodeEntry::named(0x0000_00EA, "THREAD_STUCK_IN_DEVICE_DRIVER"),
    CodeEntry::named(0x0000_00EB, "DIRTY_MAPPED_PAGES_CONGESTION"),
    CodeEntry::named(0x0000_00EC, "SESSION_HAS_VALID_SPECIAL_POOL_ON_EXIT"),
    CodeEntry::named(0x0000_00ED, "UNMOUNTABLE_BOOT_VOLUME"),
    CodeEntry::named(0x0000_00EF, "CRITICAL_PROCESS_DIED"),
    CodeEntry::named(0x0000_00F0, "STORAGE_MINIPORT_ERROR"),
    CodeEntry::named(0x0000_00F1, "SCSI_VERIFIER_DETECTED_VIOLATION"),
    CodeEntry::named(0x0000_00F2, "HARDWARE_INTERRUPT_STORM"),
    CodeEntry::named(0x0000_00F3, "DISORDERLY_SHUTDOWN"),
    CodeEntry::named(0x0000_00F4, "CRITICAL_OBJECT_TERMINATION"),
    CodeEntry::named(0x0000_00F5, "FLTMGR_FILE_SYSTEM"),
    CodeEntry::named(0x0000_00F6, "PCI_VERIFIER_DETECTED_VIOLATION"),
    CodeEntry::named(0x0000_00F7, "DRIVER_OVERRAN_STACK_BUFFER"),
    CodeEntry::named(0x0000_00F8, "RAMDISK_BOOT_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_00F9, "DRIVER_RETURNED_STATUS_REPARSE_FOR_VOLUME_OPEN"),
    CodeEntry::named(0x0000_00FA, "HTTP_DRIVER_CORRUPTED"),
    CodeEntry::named(0x0000_00FC, "ATTEMPTED_EXECUTE_OF_NOEXECUTE_MEMORY"),
    CodeEntry::named(0x0000_00FD, "DIRTY_NOWRITE_PAGES_CONGESTION"),
    CodeEntry::named(0x0000_00FE, "BUGCODE_USB_DRIVER"),
    CodeEntry::named(0x0000_00FF, "RESERVE_QUEUE_OVERFLOW"),
    CodeEntry::named(0x0000_0100, "LOADER_BLOCK_MISMATCH"),
    CodeEntry::named(0x0000_0101, "CLOCK_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_0102, "DPC_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_0103, "MUP_FILE_SYSTEM"),
    CodeEntry::named(0x0000_0104, "AGP_INVALID_ACCESS"),
    CodeEntry::named(0x0000_0105, "AGP_GART_CORRUPTION"),
    CodeEntry::named(0x0000_0106, "AGP_ILLEGALLY_REPROGRAMMED"),
    CodeEntry::named(0x0000_0108, "THIRD_PARTY_FILE_SYSTEM_FAILURE"),
    CodeEntry::named(0x0000_0109, "CRITICAL_STRUCTURE_CORRUPTION"),
    CodeEntry::named(0x0000_010A, "APP_TAGGING_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_010C, "FSRTL_EXTRA_CREATE_PARAMETER_VIOLATION"),
    CodeEntry::named(0x0000_010D, "WDF_VIOLATION"),
    CodeEntry::named(0x0000_010E, "VIDEO_MEMORY_MANAGEMENT_INTERNAL"),
    CodeEntry::named(0x0000_010F, "RESOURCE_MANAGER_EXCEPTION_NOT_HANDLED"),
    CodeEntry::named(0x0000_0111, "RECURSIVE_NMI"),
    CodeEntry::named(0x0000_0112, "MSRPC_STATE_VIOLATION"),
    CodeEntry::named(0x0000_0113, "VIDEO_DXGKRNL_FATAL_ERROR"),
    CodeEntry::named(0x0000_0114, "VIDEO_SHADOW_DRIVER_FATAL_ERROR"),
    CodeEntry::named(0x0000_0115, "AGP_INTERNAL"),
    CodeEntry::named(0x0000_0116, "VIDEO_TDR_FAILURE"),
    CodeEntry::named(0x0000_0117, "VIDEO_TDR_TIMEOUT_DETECTED"),
    CodeEntry::named(0x0000_0119, "VIDEO_SCHEDULER_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_011A, "EM_INITIALIZATION_FAILURE"),
    CodeEntry::named(0x0000_011B, "DRIVER_RETURNED_HOLDING_CANCEL_LOCK"),
    CodeEntry::named(0x0000_011C, "ATTEMPTED_WRITE_TO_CM_PROTECTED_STORAGE"),
    CodeEntry::named(0x0000_011D, "EVENT_TRACING_FATAL_ERROR"),
    CodeEntry::named(0x0000_011E, "TOO_MANY_RECURSIVE_FAULTS"),
    CodeEntry::named(0x0000_011F, "INVALID_DRIVER_HANDLE"),
    CodeEntry::named(0x0000_0120, "BITLOCKER_FATAL_ERROR"),
    CodeEntry::named(0x0000_0121, "DRIVER_VIOLATION"),
    CodeEntry::named(0x0000_0122, "WHEA_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0123, "CRYPTO_SELF_TEST_FAILURE"),
    CodeEntry::named(0x0000_0124, "WHEA_UNCORRECTABLE_ERROR"),
    CodeEntry::named(0x0000_0125, "NMR_INVALID_STATE"),
    CodeEntry::named(0x0000_0126, "NETIO_INVALID_POOL_CALLER"),
    CodeEntry::named(0x0000_0127, "PAGE_NOT_ZERO"),
    CodeEntry::named(0x0000_0128, "WORKER_THREAD_RETURNED_WITH_BAD_IO_PRIORITY"),
    CodeEntry::named(0x0000_0129, "WORKER_THREAD_RETURNED_WITH_BAD_PAGING_IO_PRIORITY"),
    CodeEntry::named(0x0000_012A, "MUI_NO_VALID_SYSTEM_LANGUAGE"),
    CodeEntry::named(0x0000_012B, "FAULTY_HARDWARE_CORRUPTED_PAGE"),
    CodeEntry::named(0x0000_012C, "EXFAT_FILE_SYSTEM"),
    CodeEntry::named(0x0000_012D, "VOLSNAP_OVERLAPPED_TABLE_ACCESS"),
    CodeEntry::named(0x0000_012E, "INVALID_MDL_RANGE"),
    CodeEntry::named(0x0000_012F, "VHD_BOOT_INITIALIZATION_FAILED"),
    CodeEntry::named(0x0000_0130, "DYNAMIC_ADD_PROCESSOR_MISMATCH"),
    CodeEntry::named(0x0000_0131, "INVALID_EXTENDED_PROCESSOR_STATE"),
    CodeEntry::named(0x0000_0132, "RESOURCE_OWNER_POINTER_INVALID"),
    CodeEntry::named(0x0000_0133, "DPC_WATCHDOG_VIOLATION"),
    CodeEntry::named(0x0000_0134, "DRIVE_EXTENDER"),
    CodeEntry::named(0x0000_0135, "REGISTRY_FILTER_DRIVER_EXCEPTION"),
    CodeEntry::named(0x0000_0136, "VHD_BOOT_HOST_VOLUME_NOT_ENOUGH_SPACE"),
    CodeEntry::named(0x0000_0137, "WIN32K_HANDLE_MANAGER"),
    CodeEntry::named(0x0000_0138, "GPIO_CONTROLLER_DRIVER_ERROR"),
    CodeEntry::named(0x0000_0139, "KERNEL_SECURITY_CHECK_FAILURE"),
    CodeEntry::named(0x0000_013A, "KERNEL_MODE_HEAP_CORRUPTION"),
    CodeEntry::named(0x0000_013B, "PASSIVE_INTERRUPT_ERROR"),
    CodeEntry::named(0x0000_013C, "INVALID_IO_BOOST_STATE"),
    CodeEntry::named(0x0000_013D, "CRITICAL_INITIALIZATION_FAILURE"),
    CodeEntry::named(0x0000_0140, "STORAGE_DEVICE_ABNORMALITY_DETECTED"),
    CodeEntry::named(0x0000_0143, "PROCESSOR_DRIVER_INTERNAL"),
    CodeEntry::named(0x0000_0144, "BUGCODE_USB3_DRIVER"),
    CodeEntry::named(0x0000_0145, "SECURE_BOOT_VIOLATION"),
    CodeEntry::named(0x0000_0147, "ABNORMAL_RESET_DETECTED"),
    CodeEntry::named(0x0000_0149, "REFS_FILE_SYSTEM"),
    CodeEntry::named(0x0000_014A, "KERNEL_WMI_INTERNAL"),
    CodeEntry::named(0x0000_014B, "SOC_SUBSYSTEM_FAILURE"),
    CodeEntry::named(0x0000_014C, "FATAL_ABNORMAL_RESET_ERROR"),
    CodeEntry::named(0x0000_014D, "EXCEPTION_SCOPE_INVALID"),
    CodeEntry::named(0x0000_014E, "SOC_CRITICAL_DEVICE_REMOVED"),
    CodeEntry::named(0x0000_014F, "PDC_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_0150, "TCPIP_AOAC_NIC_ACTIVE_REFERENCE_LEAK"),
    CodeEntry::named(0x0000_0151, "UNSUPPORTED_INSTRUCTION_MODE"),
    CodeEntry::named(0x0000_0152, "INVALID_PUSH_LOCK_FLAGS"),
    CodeEntry::named(0x0000_0153, "KERNEL_LOCK_ENTRY_LEAKED_ON_THREAD_TERMINATION"),
    CodeEntry::named(0x0000_0154, "UNEXPECTED_STORE_EXCEPTION"),
    CodeEntry::named(0x0000_0155, "OS_DATA_TAMPERING"),
    CodeEntry::named(0x0000_0157, "KERNEL_THREAD_PRIORITY_FLOOR_VIOLATION"),
    CodeEntry::named(0x0000_0158, "ILLEGAL_IOMMU_PAGE_FAULT"),
    CodeEntry::named(0x0000_0159, "HAL_ILLEGAL_IOMMU_PAGE_FAULT"),
    CodeEntry::named(0x0000_015A, "SDBUS_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_015B, "WORKER_THREAD_RETURNED_WITH_SYSTEM_PAGE_PRIORITY_ACTIVE"),
    CodeEntry::named(0x0000_0160, "WIN32K_ATOMIC_CHECK_FAILURE"),
    CodeEntry::named(0x0000_0162, "KERNEL_AUTO_BOOST_INVALID_LOCK_RELEASE"),
    CodeEntry::named(0x0000_0163, "WORKER_THREAD_TEST_CONDITION"),
    CodeEntry::named(0x0000_0164, "WIN32K_CRITICAL_FAILURE"),
    CodeEntry::named(0x0000_016C, "INVALID_RUNDOWN_PROTECTION_FLAGS"),
    CodeEntry::named(0x0000_016D, "INVALID_SLOT_ALLOCATOR_FLAGS"),
    CodeEntry::named(0x0000_016E, "ERESOURCE_INVALID_RELEASE"),
    CodeEntry::named(0x0000_0170, "CLUSTER_CSV_CLUSSVC_DISCONNECT_WATCHDOG"),
    CodeEntry::named(0x0000_0171, "CRYPTO_LIBRARY_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0173, "COREMSGCALL_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0174, "COREMSG_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_0178, "ELAM_DRIVER_DETECTED_FATAL_ERROR"),
    CodeEntry::named(0x0000_017B, "PROFILER_CONFIGURATION_ILLEGAL"),
    CodeEntry::named(0x0000_017E, "MICROCODE_REVISION_MISMATCH"),
    CodeEntry::named(0x0000_0187, "VIDEO_DWMINIT_TIMEOUT_FALLBACK_BDD"),
    CodeEntry::named(0x0000_0189, "BAD_OBJECT_HEADER"),
    CodeEntry::named(0x0000_018B, "SECURE_KERNEL_ERROR"),
    CodeEntry::named(0x0000_018C, "HYPERGUARD_VIOLATION"),
    CodeEntry::named(0x0000_018D, "SECURE_FAULT_UNHANDLED"),
    CodeEntry::named(0x0000_018E, "KERNEL_PARTITION_REFERENCE_VIOLATION"),
    CodeEntry::named(0x0000_0191, "PF_DETECTED_CORRUPTION"),
    CodeEntry::named(0x0000_0192, "KERNEL_AUTO_BOOST_LOCK_ACQUISITION_WITH_RAISED_IRQL"),
    CodeEntry::named(0x0000_0196, "LOADER_ROLLBACK_DETECTED"),
    CodeEntry::named(0x0000_0197, "WIN32K_SECURITY_FAILURE"),
    CodeEntry::named(0x0000_0199, "KERNEL_STORAGE_SLOT_IN_USE"),
    CodeEntry::named(0x0000_019A, "WORKER_THREAD_RETURNED_WHILE_ATTACHED_TO_SILO"),
    CodeEntry::named(0x0000_019B, "TTM_FATAL_ERROR"),
    CodeEntry::named(0x0000_019C, "WIN32K_POWER_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_01A0, "TTM_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_01A2, "WIN32K_CALLOUT_WATCHDOG_BUGCHECK"),
    CodeEntry::named(0x0000_01AA, "EXCEPTION_ON_INVALID_STACK"),
    CodeEntry::named(0x0000_01AB, "UNWIND_ON_INVALID_STACK"),
    CodeEntry::named(0x0000_01C6, "FAST_ERESOURCE_PRECONDITION_VIOLATION"),
    CodeEntry::named(0x0000_01C7, "STORE_DATA_STRUCTURE_CORRUPTION"),
    CodeEntry::named(0x0000_01C8, "MANUALLY_INITIATED_POWER_BUTTON_HOLD"),
    CodeEntry::named(0x0000_01CA, "SYNTHETIC_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_01CB, "INVALID_SILO_DETACH"),
    CodeEntry::named(0x0000_01CD, "INVALID_CALLBACK_STACK_ADDRESS"),
    CodeEntry::named(0x0000_01CE, "INVALID_KERNEL_STACK_ADDRESS"),
    CodeEntry::named(0x0000_01CF, "HARDWARE_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_01D0, "ACPI_FIRMWARE_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_01D2, "WORKER_THREAD_INVALID_STATE"),
    CodeEntry::named(0x0000_01D3, "WFP_INVALID_OPERATION"),
    CodeEntry::named(0x0000_01D5, "DRIVER_PNP_WATCHDOG"),
    CodeEntry::named(0x0000_01D6, "WORKER_THREAD_RETURNED_WITH_NON_DEFAULT_WORKLOAD_CLASS"),
    CodeEntry::named(0x0000_01D7, "EFS_FATAL_ERROR"),
    CodeEntry::named(0x0000_01D8, "UCMUCSI_FAILURE"),
    CodeEntry::named(0x0000_01D9, "HAL_IOMMU_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_01DA, "HAL_BLOCKED_PROCESSOR_INTERNAL_ERROR"),
    CodeEntry::named(0x0000_01DB, "IPI_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_01DC, "DMA_COMMON_BUFFER_VECTOR_ERROR"),
    CodeEntry::named(0x0000_01DD, "BUGCODE_MBBADAPTER_DRIVER"),
    CodeEntry::named(0x0000_01DE, "BUGCODE_WIFIADAPTER_DRIVER"),
    CodeEntry::named(0x0000_01DF, "PROCESSOR_START_TIMEOUT"),
    CodeEntry::named(0x0000_01E4, "VIDEO_DXGKRNL_SYSMM_FATAL_ERROR"),
    CodeEntry::named(0x0000_01E9, "ILLEGAL_ATS_INITIALIZATION"),
    CodeEntry::named(0x0000_01EA, "SECURE_PCI_CONFIG_SPACE_ACCESS_VIOLATION"),
    CodeEntry::named(0x0000_01EB, "DAM_WATCHDOG_TIMEOUT"),
    CodeEntry::named(0x0000_01ED, "HANDLE_ERROR_ON_CRITICAL_THREAD"),
    CodeEntry::named(0x0000_0356, "XBOX_ERACTRL_CS_TIMEOUT"),
    CodeEntry::named(0x0000_0BFE, "BC_BLUETOOTH_VERIFIER_FAULT"),
    CodeEntry::named(0x0000_0BFF, "BC_BTHMINI_VERIFIER_FAULT"),
    CodeEntry::named(0x0002_0001, "HYPERVISOR_ERROR"),
    CodeEntry::named(0x1000_007E, "SYSTEM_THREAD_EXCEPTION_NOT_HANDLED_M"),
    CodeEntry::named(0x1000_007F, "UNEXPECTED_KERNEL_MODE_TRAP_M"),
    CodeEntry::named(0x1000_008E, "KERNEL_MODE_EXCEPTION_NOT_HANDLED_M"),
    CodeEntry::named(0x1000_00EA, "THREAD_STUCK_IN_DEVICE_DRIVER_M"),
    CodeEntry::named(0x4000_008A, "THREAD_TERMINATE_HELD_MUTEX"),
    CodeEntry::named(0xC000_0218, "STATUS_CANNOT_LOAD_REGISTRY_FILE"),
    CodeEntry::named(0xC000_021A, "WINLOGON_FATAL_ERROR"),
    CodeEntry::named(0xC000_0221, "STATUS_IMAGE_CHECKSUM_MISMATCH"),
    CodeEntry::named(0xDEAD_DEAD, "MANUALLY_INITIATED_CRASH1"),
];
