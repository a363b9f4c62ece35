use crate::definition::{Agent, Definition, Infrastructure, OperatingSystem};
use crate::stage_manager::{StageCollection, StageGroupKind, StageId, StageSystemError};

const CENTOS_OS: &[StageId] = &["base_centos", "base_yum"];

const UBUNTU_OS: &[StageId] = &[
    "base_debootstrap",
    "base_apt",
    "bosh_dpkg_list",
    "bosh_sysstat",
    "bosh_sysctl",
    "system_kernel",
];

const COMMON_OS: &[StageId] = &[
    "bosh_users",
    "bosh_monit",
    "bosh_ntpdate",
    "bosh_sudoers",
    "rsyslog",
    "system_grub",
];

const GO_AGENT: &[StageId] = &["bosh_ruby", "bosh_go_agent", "bosh_micro_go", "aws_cli"];
const RUBY_AGENT: &[StageId] = &["bosh_ruby", "bosh_agent", "bosh_micro"];

const AWS: &[StageId] = &[
    "system_aws_network",
    "system_aws_modules",
    "system_parameters",
    "bosh_clean",
    "bosh_harden",
    "bosh_harden_ssh",
    "image_create",
    "image_install_grub",
    "image_aws_update_grub",
    "image_aws_prepare_stemcell",
    "stemcell",
];

const CENTOS_OPENSTACK: &[StageId] = &[
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
];

const DEFAULT_OPENSTACK: &[StageId] = &[
    "system_openstack_network",
    "system_openstack_clock",
    "system_openstack_modules",
    "system_parameters",
    "bosh_clean",
    "bosh_harden",
    "bosh_harden_ssh",
    "image_create",
    "image_install_grub",
    "image_openstack_qcow2",
    "image_openstack_prepare_stemcell",
    "stemcell_openstack",
];

const CENTOS_OVF: &[StageId] = &[
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

const DEFAULT_OVF: &[StageId] = &[
    "system_open_vm_tools",
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

fn expected_infrastructure(infrastructure: Infrastructure, operating_system: OperatingSystem) -> &'static [StageId] {
    match (infrastructure, operating_system) {
        (Infrastructure::Aws, _) => AWS,
        (Infrastructure::OpenStack, OperatingSystem::Centos) => CENTOS_OPENSTACK,
        (Infrastructure::OpenStack, OperatingSystem::Ubuntu) => DEFAULT_OPENSTACK,
        (Infrastructure::Vsphere | Infrastructure::Vcloud, OperatingSystem::Centos) => CENTOS_OVF,
        (Infrastructure::Vsphere | Infrastructure::Vcloud, OperatingSystem::Ubuntu) => DEFAULT_OVF,
    }
}

fn expected_operating_system(operating_system: OperatingSystem) -> Vec<StageId> {
    let base = match operating_system {
        OperatingSystem::Centos => CENTOS_OS,
        OperatingSystem::Ubuntu => UBUNTU_OS,
    };
    [base, COMMON_OS].concat()
}

fn expected_agent(agent: Agent) -> &'static [StageId] {
    match agent {
        Agent::Go => GO_AGENT,
        Agent::Ruby => RUBY_AGENT,
    }
}

#[test]
fn test_every_combination_matches_the_table() {
    for definition in Definition::all() {
        let collection = StageCollection::new(&definition);
        assert_eq!(
            collection.operating_system_stages(),
            expected_operating_system(definition.operating_system()),
            "operating system stages for {}",
            definition
        );
        assert_eq!(
            collection.extract_operating_system_stages(),
            vec!["untar_base_os_image"],
            "extract stages for {}",
            definition
        );
        assert_eq!(
            collection.agent_stages(),
            expected_agent(definition.agent()),
            "agent stages for {}",
            definition
        );
        assert_eq!(
            collection.infrastructure_stages(),
            expected_infrastructure(definition.infrastructure(), definition.operating_system()),
            "infrastructure stages for {}",
            definition
        );
    }
}

#[test]
fn test_agent_stages_depend_only_on_agent() {
    for agent in Agent::ALL {
        let reference = StageCollection::new(&Definition::new(
            Infrastructure::Aws,
            OperatingSystem::Ubuntu,
            agent,
        ))
        .agent_stages();
        for definition in Definition::all().into_iter().filter(|d| d.agent() == agent) {
            assert_eq!(StageCollection::new(&definition).agent_stages(), reference);
        }
    }
}

#[test]
fn test_agent_stages_start_with_bootstrap_runtime() {
    for agent in Agent::ALL {
        let definition = Definition::new(Infrastructure::Vsphere, OperatingSystem::Centos, agent);
        assert_eq!(StageCollection::new(&definition).agent_stages()[0], "bosh_ruby");
    }
}

#[test]
fn test_aws_ignores_operating_system() {
    let centos = Definition::new(Infrastructure::Aws, OperatingSystem::Centos, Agent::Go);
    let ubuntu = Definition::new(Infrastructure::Aws, OperatingSystem::Ubuntu, Agent::Go);
    assert_eq!(
        StageCollection::new(&centos).infrastructure_stages(),
        StageCollection::new(&ubuntu).infrastructure_stages()
    );
}

#[test]
fn test_convenience_accessors_agree_with_dispatch() {
    for definition in Definition::all() {
        let collection = StageCollection::new(&definition);
        let dispatched = collection.infrastructure_stages();
        match definition.infrastructure() {
            Infrastructure::OpenStack => assert_eq!(collection.openstack_stages(), dispatched),
            Infrastructure::Vsphere => assert_eq!(collection.vsphere_stages(), dispatched),
            Infrastructure::Vcloud => assert_eq!(collection.vcloud_stages(), dispatched),
            Infrastructure::Aws => {}
        }
    }
}

#[test]
fn test_convenience_accessors_ignore_infrastructure() {
    // An AWS definition still resolves the OpenStack branch from its OS.
    let definition = Definition::new(Infrastructure::Aws, OperatingSystem::Centos, Agent::Go);
    let collection = StageCollection::new(&definition);
    assert_eq!(collection.openstack_stages(), CENTOS_OPENSTACK);
    assert_eq!(collection.vsphere_stages(), CENTOS_OVF);
    assert_eq!(collection.vcloud_stages(), CENTOS_OVF);

    let definition = Definition::new(Infrastructure::Vcloud, OperatingSystem::Ubuntu, Agent::Ruby);
    let collection = StageCollection::new(&definition);
    assert_eq!(collection.openstack_stages(), DEFAULT_OPENSTACK);
    assert_eq!(collection.vsphere_stages(), DEFAULT_OVF);
}

#[test]
fn test_aws_ubuntu_go_scenario() {
    let definition = Definition::new(Infrastructure::Aws, OperatingSystem::Ubuntu, Agent::Go);
    let collection = StageCollection::new(&definition);
    assert_eq!(
        collection.operating_system_stages(),
        vec![
            "base_debootstrap",
            "base_apt",
            "bosh_dpkg_list",
            "bosh_sysstat",
            "bosh_sysctl",
            "system_kernel",
            "bosh_users",
            "bosh_monit",
            "bosh_ntpdate",
            "bosh_sudoers",
            "rsyslog",
            "system_grub",
        ]
    );
    assert_eq!(
        collection.agent_stages(),
        vec!["bosh_ruby", "bosh_go_agent", "bosh_micro_go", "aws_cli"]
    );
    assert_eq!(collection.infrastructure_stages(), AWS);
}

#[test]
fn test_vsphere_centos_uses_centos_list() {
    let definition = Definition::new(Infrastructure::Vsphere, OperatingSystem::Centos, Agent::Ruby);
    let stages = StageCollection::new(&definition).infrastructure_stages();
    assert_eq!(stages, CENTOS_OVF);
    assert!(!stages.contains(&"system_open_vm_tools"));
}

#[test]
fn test_openstack_ubuntu_uses_default_list() {
    for agent in Agent::ALL {
        let definition = Definition::new(Infrastructure::OpenStack, OperatingSystem::Ubuntu, agent);
        let stages = StageCollection::new(&definition).infrastructure_stages();
        assert_eq!(stages, DEFAULT_OPENSTACK);
        assert_eq!(stages[0], "system_openstack_network");
        assert!(stages.contains(&"system_openstack_clock"));
        assert!(stages.contains(&"system_openstack_modules"));
        assert!(!stages.contains(&"system_openstack_network_centos"));
    }
}

#[test]
fn test_stages_for_matches_named_queries() {
    let definition = Definition::new(Infrastructure::Vcloud, OperatingSystem::Ubuntu, Agent::Ruby);
    let collection = StageCollection::new(&definition);
    assert_eq!(collection.stages_for(StageGroupKind::OperatingSystem), collection.operating_system_stages());
    assert_eq!(
        collection.stages_for(StageGroupKind::ExtractOperatingSystem),
        collection.extract_operating_system_stages()
    );
    assert_eq!(collection.stages_for(StageGroupKind::Agent), collection.agent_stages());
    assert_eq!(collection.stages_for(StageGroupKind::Infrastructure), collection.infrastructure_stages());
}

#[test]
fn test_stage_group_kind_parsing() {
    assert_eq!("agent".parse::<StageGroupKind>(), Ok(StageGroupKind::Agent));
    assert_eq!("operating_system".parse::<StageGroupKind>(), Ok(StageGroupKind::OperatingSystem));
    assert_eq!(
        "Extract-Operating-System".parse::<StageGroupKind>(),
        Ok(StageGroupKind::ExtractOperatingSystem)
    );
    assert_eq!(
        "kernel".parse::<StageGroupKind>(),
        Err(StageSystemError::UnknownStageGroup { name: "kernel".to_string() })
    );
}

#[test]
fn test_stemcell_pipeline_orders_extract_agent_infrastructure() {
    let definition = Definition::new(Infrastructure::OpenStack, OperatingSystem::Centos, Agent::Ruby);
    let collection = StageCollection::new(&definition);
    let pipeline = collection.stemcell_pipeline().unwrap();

    let expected: Vec<StageId> = ["untar_base_os_image"]
        .iter()
        .copied()
        .chain(RUBY_AGENT.iter().copied())
        .chain(CENTOS_OPENSTACK.iter().copied())
        .collect();
    assert_eq!(pipeline.stages(), expected.as_slice());
    assert_eq!(pipeline.name(), "stemcell");
    assert!(pipeline.description().contains("openstack-centos-ruby"));
}

#[test]
fn test_os_image_pipeline_holds_operating_system_stages() {
    for definition in Definition::all() {
        let collection = StageCollection::new(&definition);
        let pipeline = collection.operating_system_image_pipeline().unwrap();
        assert_eq!(pipeline.stages(), collection.operating_system_stages().as_slice());
        assert_eq!(pipeline.name(), "os_image");
    }
}

#[test]
fn test_every_pipeline_builds_without_duplicates() {
    for definition in Definition::all() {
        let collection = StageCollection::new(&definition);
        assert!(collection.stemcell_pipeline().is_ok(), "stemcell pipeline for {}", definition);
        assert!(collection.operating_system_image_pipeline().is_ok(), "os image pipeline for {}", definition);
    }
}

#[test]
fn test_queries_are_safe_across_threads() {
    let handles: Vec<_> = Definition::all()
        .into_iter()
        .map(|definition| {
            std::thread::spawn(move || {
                let collection = StageCollection::new(&definition);
                (definition, collection.infrastructure_stages())
            })
        })
        .collect();
    for handle in handles {
        let (definition, stages) = handle.join().unwrap();
        assert_eq!(stages, expected_infrastructure(definition.infrastructure(), definition.operating_system()));
    }
}
