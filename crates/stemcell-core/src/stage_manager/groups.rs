//! Static stage groups.
//!
//! Each group is an ordered fragment of stage ids. Groups carry no meaning on
//! their own; [`StageCollection`](super::StageCollection) concatenates them
//! into the lists handed to the build executor. Order inside a group is
//! load-bearing: image creation precedes bootloader installation, which
//! precedes stemcell packaging.

use super::StageId;

/// A named, constant, ordered list of stage ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageGroup {
    /// The identifier of the group.
    pub name: &'static str,
    /// The ordered stage ids in this group.
    pub stages: &'static [StageId],
    /// An optional description of the group's purpose.
    pub description: Option<&'static str>,
}

impl StageGroup {
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

// --- Operating system ---

pub const CENTOS_OS_STAGES: StageGroup = StageGroup {
    name: "centos_os_stages",
    stages: &["base_centos", "base_yum"],
    description: Some("Bootstrap a CentOS root filesystem"),
};

pub const UBUNTU_OS_STAGES: StageGroup = StageGroup {
    name: "ubuntu_os_stages",
    stages: &[
        "base_debootstrap",
        "base_apt",
        "bosh_dpkg_list",
        "bosh_sysstat",
        "bosh_sysctl",
        "system_kernel",
    ],
    description: Some("Bootstrap an Ubuntu root filesystem"),
};

pub const COMMON_OS_STAGES: StageGroup = StageGroup {
    name: "common_os_stages",
    stages: &[
        // Bosh steps
        "bosh_users",
        "bosh_monit",
        "bosh_ntpdate",
        "bosh_sudoers",
        "rsyslog",
        // GRUB/kernel
        "system_grub",
    ],
    description: Some("OS customization shared by every guest"),
};

pub const EXTRACT_OS_STAGES: StageGroup = StageGroup {
    name: "extract_os_stages",
    stages: &["untar_base_os_image"],
    description: Some("Unpack a pre-built base OS image"),
};

// --- Agent ---

pub const GO_AGENT_STAGES: StageGroup = StageGroup {
    name: "go_agent_stages",
    stages: &["bosh_ruby", "bosh_go_agent", "bosh_micro_go", "aws_cli"],
    description: Some("Install the Go agent"),
};

pub const RUBY_AGENT_STAGES: StageGroup = StageGroup {
    name: "ruby_agent_stages",
    stages: &["bosh_ruby", "bosh_agent", "bosh_micro"],
    description: Some("Install the Ruby agent"),
};

// --- Infrastructure ---

pub const AWS_STAGES: StageGroup = StageGroup {
    name: "aws_stages",
    stages: &[
        // Misc
        "system_aws_network",
        "system_aws_modules",
        "system_parameters",
        // Finalisation
        "bosh_clean",
        "bosh_harden",
        "bosh_harden_ssh",
        // Image/bootloader
        "image_create",
        "image_install_grub",
        "image_aws_update_grub",
        "image_aws_prepare_stemcell",
        // Final stemcell
        "stemcell",
    ],
    description: Some("AWS image and stemcell packaging"),
};

pub const CENTOS_OPENSTACK_STAGES: StageGroup = StageGroup {
    name: "centos_openstack_stages",
    stages: &[
        "system_openstack_network_centos",
        "system_parameters",
        "bosh_clean",
        "bosh_harden",
        "bosh_harden_ssh",
        "image_create",
        "image_install_grub",
        "image_openstack_qcow2",
        "image_openstack_prepare_stemcell",
        "stemcell_openstack",
    ],
    description: Some("OpenStack qcow2 stemcell for CentOS guests"),
};

pub const DEFAULT_OPENSTACK_STAGES: StageGroup = StageGroup {
    name: "default_openstack_stages",
    stages: &[
        // Misc
        "system_openstack_network",
        "system_openstack_clock",
        "system_openstack_modules",
        "system_parameters",
        // Finalisation
        "bosh_clean",
        "bosh_harden",
        "bosh_harden_ssh",
        // Image/bootloader
        "image_create",
        "image_install_grub",
        "image_openstack_qcow2",
        "image_openstack_prepare_stemcell",
        // Final stemcell
        "stemcell_openstack",
    ],
    description: Some("OpenStack qcow2 stemcell"),
};

// open_vm_tools is not installed on CentOS guests
const CENTOS_OVF_STAGES: &[StageId] = &[
    "system_vsphere_cdrom",
    "system_parameters",
    "bosh_clean",
    "bosh_harden",
    "image_create",
    "image_install_grub",
    "image_ovf_vmx",
    "image_ovf_generate",
    "image_ovf_prepare_stemcell",
    "stemcell",
];

const DEFAULT_OVF_STAGES: &[StageId] = &[
    "system_open_vm_tools",
    "system_vsphere_cdrom",
    // Misc
    "system_parameters",
    // Finalisation
    "bosh_clean",
    "bosh_harden",
    // Image/bootloader
    "image_create",
    "image_install_grub",
    "image_ovf_vmx",
    "image_ovf_generate",
    "image_ovf_prepare_stemcell",
    // Final stemcell
    "stemcell",
];

pub const CENTOS_VSPHERE_STAGES: StageGroup = StageGroup {
    name: "centos_vsphere_stages",
    stages: CENTOS_OVF_STAGES,
    description: Some("vSphere OVF stemcell for CentOS guests"),
};

pub const DEFAULT_VSPHERE_STAGES: StageGroup = StageGroup {
    name: "default_vsphere_stages",
    stages: DEFAULT_OVF_STAGES,
    description: Some("vSphere OVF stemcell"),
};

pub const CENTOS_VCLOUD_STAGES: StageGroup = StageGroup {
    name: "centos_vcloud_stages",
    stages: CENTOS_OVF_STAGES,
    description: Some("vCloud OVF stemcell for CentOS guests"),
};

pub const DEFAULT_VCLOUD_STAGES: StageGroup = StageGroup {
    name: "default_vcloud_stages",
    stages: DEFAULT_OVF_STAGES,
    description: Some("vCloud OVF stemcell"),
};

/// Every group defined above.
pub const ALL_STAGE_GROUPS: &[StageGroup] = &[
    CENTOS_OS_STAGES,
    UBUNTU_OS_STAGES,
    COMMON_OS_STAGES,
    EXTRACT_OS_STAGES,
    GO_AGENT_STAGES,
    RUBY_AGENT_STAGES,
    AWS_STAGES,
    CENTOS_OPENSTACK_STAGES,
    DEFAULT_OPENSTACK_STAGES,
    CENTOS_VSPHERE_STAGES,
    DEFAULT_VSPHERE_STAGES,
    CENTOS_VCLOUD_STAGES,
    DEFAULT_VCLOUD_STAGES,
];

